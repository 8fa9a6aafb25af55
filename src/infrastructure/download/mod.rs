mod reqwest_downloader;

pub use reqwest_downloader::ReqwestAudioDownloader;
