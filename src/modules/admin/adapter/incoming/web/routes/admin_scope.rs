use actix_web::{dev::HttpServiceFactory, middleware::from_fn, web, Scope};

use crate::modules::auth::adapter::incoming::web::middleware::admin_session_gate;
use crate::modules::blog::Blog;
use crate::modules::content::adapter::incoming::web::routes::get_content_handler;
use crate::modules::content::application::domain::Content;
use crate::modules::experience::Experience;
use crate::modules::project::Project;
use crate::modules::publication::Publication;
use crate::modules::skill::Skill;

use super::{admin_cards_handler, admin_dashboard_handler, admin_session_handler};

/// `/admin`, behind the session gate.
pub fn admin_scope() -> impl HttpServiceFactory {
    let scope = web::scope("/admin")
        .route("", web::get().to(admin_dashboard_handler))
        .route("/session", web::get().to(admin_session_handler));

    let scope = content_views::<Skill>(scope);
    let scope = content_views::<Experience>(scope);
    let scope = content_views::<Project>(scope);
    let scope = content_views::<Publication>(scope);
    let scope = content_views::<Blog>(scope);

    scope.wrap(from_fn(admin_session_gate))
}

/// Card list plus the edit prefill, which is a fresh fetch by id.
fn content_views<C: Content>(scope: Scope) -> Scope {
    let base = format!("/{}", C::KIND.plural());

    scope
        .route(&base, web::get().to(admin_cards_handler::<C>))
        .route(
            &format!("{}/edit/{{id}}", base),
            web::get().to(get_content_handler::<C>),
        )
}
