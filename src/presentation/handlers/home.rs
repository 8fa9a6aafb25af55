use axum::response::Html;

const HOME_PAGE: &str = r#"<html><body>
<h2>Submit an audio URL to transcribe:</h2>
<form action="/transcribe_url" method="post">
<input name="url" type="text" placeholder="Enter audio URL" required>
<button type="submit">Transcribe</button>
</form>
<p>Swagger: <a href="/docs">/docs</a></p>
</body></html>
"#;

pub async fn home_handler() -> Html<&'static str> {
    Html(HOME_PAGE)
}
