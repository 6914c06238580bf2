use crate::application::http::{
    case::router::CaseApiDoc, disease::router::DiseaseApiDoc, doctor::router::DoctorApiDoc,
    health::HealthApiDoc, history::router::HistoryApiDoc,
    recommendation::router::RecommendationApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FoodRec API"
    ),
    nest(
        (path = "/health", api = HealthApiDoc),
        (path = "/recommend", api = RecommendationApiDoc),
        (path = "/history", api = HistoryApiDoc),
        (path = "/cases", api = CaseApiDoc),
        (path = "/diseases", api = DiseaseApiDoc),
        (path = "/doctors", api = DoctorApiDoc),
    )
)]
pub struct ApiDoc;
