mod temp_file_stager;

pub use temp_file_stager::TempFileStager;
