//! Markdown skill documents.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use openship_app::ports::SkillRepository;
use openship_domain::skill::{MARKDOWN_CONTENT_TYPE, Skill, SkillName};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Skill),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(skill) => (
                [(header::CONTENT_TYPE, MARKDOWN_CONTENT_TYPE)],
                skill.markdown,
            )
                .into_response(),
        }
    }
}

/// `GET /skills/{name}` — the skill's markdown, byte for byte.
pub async fn get<SR>(
    State(state): State<AppState<SR>>,
    Path(name): Path<String>,
) -> Result<GetResponse, ApiError>
where
    SR: SkillRepository + Send + Sync + 'static,
{
    let name = SkillName::new(name)?;
    let skill = state.skill_service.get_skill(&name).await?;
    Ok(GetResponse::Ok(skill))
}
