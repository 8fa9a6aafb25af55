use axum::Json;
use axum::response::Html;
use serde_json::{Value, json};

const DOCS_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head>
<title>Audio Transcription API (via URL) - Docs</title>
<link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>
window.onload = () => {
  window.ui = SwaggerUIBundle({ url: "/openapi.json", dom_id: "#swagger-ui" });
};
</script>
</body>
</html>
"##;

pub async fn docs_handler() -> Html<&'static str> {
    Html(DOCS_PAGE)
}

pub async fn openapi_handler() -> Json<Value> {
    Json(openapi_document())
}

pub fn openapi_document() -> Value {
    let error = json!({ "$ref": "#/components/schemas/Error" });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Audio Transcription API (via URL)",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": {
            "/": {
                "get": {
                    "summary": "Home",
                    "responses": {
                        "200": { "description": "HTML form", "content": { "text/html": {} } }
                    }
                }
            },
            "/transcribe_url": {
                "post": {
                    "summary": "Transcribe From Url",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/AudioUrl" }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Transcription and summary",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/TranscriptionResponse" }
                                }
                            }
                        },
                        "400": { "description": "Download failed", "content": { "application/json": { "schema": error } } },
                        "422": { "description": "Invalid request", "content": { "application/json": { "schema": error } } },
                        "500": { "description": "Service unavailable or internal error", "content": { "application/json": { "schema": error } } }
                    }
                }
            },
            "/health": {
                "get": {
                    "summary": "Health",
                    "responses": { "200": { "description": "Liveness and inference readiness" } }
                }
            }
        },
        "components": {
            "schemas": {
                "AudioUrl": {
                    "type": "object",
                    "required": ["url"],
                    "properties": { "url": { "type": "string", "title": "Url" } }
                },
                "TranscriptionResponse": {
                    "type": "object",
                    "required": ["source_url", "transcription", "summary", "api_endpoint"],
                    "properties": {
                        "source_url": { "type": "string" },
                        "transcription": { "type": "string" },
                        "summary": { "type": "string" },
                        "api_endpoint": { "type": "string" }
                    }
                },
                "Error": {
                    "type": "object",
                    "required": ["detail"],
                    "properties": { "detail": { "type": "string" } }
                }
            }
        }
    })
}
