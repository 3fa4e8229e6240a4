use axum::response::Html;

static GALLERY_PAGE: &str = include_str!("../../static/index.html");

pub async fn get_root() -> Html<&'static str> {
    Html(GALLERY_PAGE)
}
