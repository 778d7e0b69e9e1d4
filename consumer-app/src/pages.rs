use axum::response::Html;

use crate::api::render_example;

/// Home page: renders the example view as a small HTML document.
pub async fn home() -> Html<String> {
    let view = render_example();
    Html(format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>consumer-app</title></head>\n\
         <body>\n\
         <h1>company-utils demo</h1>\n\
         <p>Original: {}</p>\n\
         <p>First five: {}</p>\n\
         </body>\n\
         </html>\n",
        view.original, view.first_five
    ))
}
