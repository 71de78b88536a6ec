use utoipa::OpenApi;

use crate::application::http::{
    analysis::router::AnalysisApiDoc, chat::router::ChatApiDoc, menu::router::MenuApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kondate API"
    ),
    nest(
        (path = "/menus", api = MenuApiDoc),
        (path = "/analysis", api = AnalysisApiDoc),
        (path = "/chat", api = ChatApiDoc),
    )
)]
pub struct ApiDoc;
