//! HTTP routes for calendar endpoints.
//!
//! A path position holds one parameter name, so the subject segment is
//! `:subject` whether it carries a name (GET, POST) or an id (PUT, DELETE).

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    create_course, create_subject, create_teacher, delete_subject, get_agenda,
    get_subject_by_name, list_subjects, list_teachers, query_courses, rename_subject,
    CalendarHandlers,
};

/// Creates the calendar router with all endpoints.
pub fn calendar_routes(handlers: CalendarHandlers) -> Router {
    Router::new()
        .route("/ens", get(list_teachers))
        .route("/ens/:name", post(create_teacher))
        .route("/matiere", get(list_subjects))
        .route(
            "/matiere/:subject",
            get(get_subject_by_name)
                .post(create_subject)
                .delete(delete_subject),
        )
        .route("/matiere/:subject/:new_name", put(rename_subject))
        .route("/cours", post(create_course))
        .route("/cours/:week/:id", get(query_courses))
        .route("/agenda", get(get_agenda))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCalendarStore;
    use crate::domain::calendar::Agenda;
    use std::sync::Arc;

    #[test]
    fn calendar_routes_build_without_conflicts() {
        let store = Arc::new(InMemoryCalendarStore::new());
        let handlers = CalendarHandlers::new(store.clone(), store.clone(), store, Agenda::shared());
        let _router = calendar_routes(handlers);
    }
}
