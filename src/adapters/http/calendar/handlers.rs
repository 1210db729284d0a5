//! HTTP handlers for calendar endpoints.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use crate::application::handlers::{
    CreateCourseCommand, CreateCourseHandler, CreateSubjectCommand, CreateSubjectHandler,
    CreateTeacherCommand, CreateTeacherHandler, DeleteSubjectCommand, DeleteSubjectHandler,
    GetAgendaHandler, GetSubjectByNameHandler, GetSubjectByNameQuery, ListSubjectsHandler,
    ListTeachersHandler, QueryCoursesHandler, QueryCoursesQuery, RenameSubjectCommand,
    RenameSubjectHandler,
};
use crate::domain::calendar::{CalendarError, Course, SharedAgenda};
use crate::domain::foundation::{SubjectId, TeacherId};
use crate::ports::{CourseRepository, SubjectRepository, TeacherRepository};

use super::dto::{
    CourseResponse, CreateCourseRequest, ErrorResponse, SubjectResponse, SubjectWeightQuery,
    TeacherResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CalendarHandlers {
    create_teacher: Arc<CreateTeacherHandler>,
    list_teachers: Arc<ListTeachersHandler>,
    create_subject: Arc<CreateSubjectHandler>,
    list_subjects: Arc<ListSubjectsHandler>,
    get_subject_by_name: Arc<GetSubjectByNameHandler>,
    rename_subject: Arc<RenameSubjectHandler>,
    delete_subject: Arc<DeleteSubjectHandler>,
    create_course: Arc<CreateCourseHandler>,
    query_courses: Arc<QueryCoursesHandler>,
    get_agenda: Arc<GetAgendaHandler>,
}

impl CalendarHandlers {
    /// Builds every handler over the given repositories and shared agenda.
    pub fn new(
        teachers: Arc<dyn TeacherRepository>,
        subjects: Arc<dyn SubjectRepository>,
        courses: Arc<dyn CourseRepository>,
        agenda: SharedAgenda,
    ) -> Self {
        Self {
            create_teacher: Arc::new(CreateTeacherHandler::new(teachers.clone())),
            list_teachers: Arc::new(ListTeachersHandler::new(teachers)),
            create_subject: Arc::new(CreateSubjectHandler::new(subjects.clone())),
            list_subjects: Arc::new(ListSubjectsHandler::new(subjects.clone())),
            get_subject_by_name: Arc::new(GetSubjectByNameHandler::new(subjects.clone())),
            rename_subject: Arc::new(RenameSubjectHandler::new(subjects.clone())),
            delete_subject: Arc::new(DeleteSubjectHandler::new(subjects)),
            create_course: Arc::new(CreateCourseHandler::new(courses.clone(), agenda.clone())),
            query_courses: Arc::new(QueryCoursesHandler::new(courses.clone())),
            get_agenda: Arc::new(GetAgendaHandler::new(courses, agenda)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /calendar/ens/:name - Create a teacher
pub async fn create_teacher(
    State(handlers): State<CalendarHandlers>,
    Path(name): Path<String>,
) -> Response {
    match handlers
        .create_teacher
        .handle(CreateTeacherCommand { name })
        .await
    {
        Ok(teacher) => (StatusCode::CREATED, Json(TeacherResponse::from(&teacher))).into_response(),
        Err(e) => handle_calendar_error(e),
    }
}

/// GET /calendar/ens - List teachers
pub async fn list_teachers(State(handlers): State<CalendarHandlers>) -> Response {
    match handlers.list_teachers.handle().await {
        Ok(teachers) => {
            let response: Vec<TeacherResponse> = teachers.iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_calendar_error(e),
    }
}

/// POST /calendar/matiere/:name?weight= - Create a subject
pub async fn create_subject(
    State(handlers): State<CalendarHandlers>,
    Path(name): Path<String>,
    Query(params): Query<SubjectWeightQuery>,
) -> Response {
    let cmd = CreateSubjectCommand {
        name,
        weight: params.weight,
    };

    match handlers.create_subject.handle(cmd).await {
        Ok(subject) => (StatusCode::CREATED, Json(SubjectResponse::from(&subject))).into_response(),
        Err(e) => handle_calendar_error(e),
    }
}

/// GET /calendar/matiere - List subjects
pub async fn list_subjects(State(handlers): State<CalendarHandlers>) -> Response {
    match handlers.list_subjects.handle().await {
        Ok(subjects) => {
            let response: Vec<SubjectResponse> = subjects.iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_calendar_error(e),
    }
}

/// GET /calendar/matiere/:name - Get the subject carrying a name
pub async fn get_subject_by_name(
    State(handlers): State<CalendarHandlers>,
    Path(name): Path<String>,
) -> Response {
    match handlers
        .get_subject_by_name
        .handle(GetSubjectByNameQuery { name })
        .await
    {
        Ok(subject) => (StatusCode::OK, Json(SubjectResponse::from(&subject))).into_response(),
        Err(e) => handle_calendar_error(e),
    }
}

/// PUT /calendar/matiere/:id/:new_name - Rename a subject
pub async fn rename_subject(
    State(handlers): State<CalendarHandlers>,
    Path((subject_id, new_name)): Path<(String, String)>,
) -> Response {
    let subject_id = match parse_segment::<SubjectId>("subject id", &subject_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = RenameSubjectCommand {
        subject_id,
        new_name,
    };

    match handlers.rename_subject.handle(cmd).await {
        Ok(subject) => (StatusCode::OK, Json(SubjectResponse::from(&subject))).into_response(),
        Err(e) => handle_calendar_error(e),
    }
}

/// DELETE /calendar/matiere/:id - Delete a subject
pub async fn delete_subject(
    State(handlers): State<CalendarHandlers>,
    Path(subject_id): Path<String>,
) -> Response {
    let subject_id = match parse_segment::<SubjectId>("subject id", &subject_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .delete_subject
        .handle(DeleteSubjectCommand { subject_id })
        .await
    {
        Ok(removed) => (StatusCode::OK, Json(SubjectResponse::from(&removed))).into_response(),
        Err(e) => handle_calendar_error(e),
    }
}

/// POST /calendar/cours - Schedule a course
pub async fn create_course(
    State(handlers): State<CalendarHandlers>,
    Json(req): Json<CreateCourseRequest>,
) -> Response {
    let cmd = CreateCourseCommand {
        kind: req.kind,
        subject_id: SubjectId::new(req.subject_id),
        teacher_id: TeacherId::new(req.teacher_id),
        start: req.start,
        duration_minutes: req.duration_minutes,
    };

    match handlers.create_course.handle(cmd).await {
        Ok(course) => (StatusCode::CREATED, Json(CourseResponse::from(&course))).into_response(),
        Err(e) => handle_calendar_error(e),
    }
}

/// GET /calendar/cours/:week/:id - Courses in a week or related to an id
pub async fn query_courses(
    State(handlers): State<CalendarHandlers>,
    Path((week, id)): Path<(String, String)>,
) -> Response {
    let week = match parse_segment::<i64>("week", &week) {
        Ok(week) => week,
        Err(response) => return response,
    };
    let id = match parse_segment::<i64>("id", &id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .query_courses
        .handle(QueryCoursesQuery { week, id })
        .await
    {
        Ok(courses) => courses_response(&courses),
        Err(e) => handle_calendar_error(e),
    }
}

/// GET /calendar/agenda - Registered courses in registration order
pub async fn get_agenda(State(handlers): State<CalendarHandlers>) -> Response {
    match handlers.get_agenda.handle().await {
        Ok(courses) => courses_response(&courses),
        Err(e) => handle_calendar_error(e),
    }
}

fn courses_response(courses: &[Course]) -> Response {
    let response: Vec<CourseResponse> = courses.iter().map(Into::into).collect();
    (StatusCode::OK, Json(response)).into_response()
}

fn parse_segment<T: FromStr>(what: &str, raw: &str) -> Result<T, Response> {
    raw.parse::<T>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!("Invalid {}: {}", what, raw))),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn error_status(error: &CalendarError) -> StatusCode {
    match error {
        CalendarError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        CalendarError::NotFound { .. } => StatusCode::NOT_FOUND,
        CalendarError::Ambiguous { .. } | CalendarError::Conflict(_) => StatusCode::CONFLICT,
        CalendarError::StoreFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn handle_calendar_error(error: CalendarError) -> Response {
    let status = error_status(&error);
    if status.is_server_error() {
        error!(code = error.code(), error = %error, "Calendar request failed");
    } else {
        warn!(code = error.code(), error = %error, "Calendar request rejected");
    }
    (status, Json(ErrorResponse::from(&error))).into_response()
}
