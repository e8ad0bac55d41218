use actix_web::{web, App, HttpResponse, HttpServer};
use kinderhub_sdk::{ClassGroupSubjectDTO, KinderhubSDK, NotificationDTO, ID};
use serde_json::json;
use std::sync::Mutex;

/// In-memory stand-in for the kinderhub backend, serving the REST contract
/// the SDK consumes. Requests with side effects are captured so tests can
/// assert on call counts and payload shapes.
pub struct FixtureState {
    pub username: String,
    pub student_id: ID,
    pub fail_student_lookup: bool,
    pub notifications: Vec<NotificationDTO>,
    pub fail_mark_read: bool,
    pub class_group_subjects: Vec<ClassGroupSubjectDTO>,
    pub fail_class_group_list: bool,
    pub fail_create_activity: bool,
    pub grade_score: f64,
    pub student_lookups: Mutex<usize>,
    pub mark_read_requests: Mutex<Vec<serde_json::Value>>,
    pub create_requests: Mutex<Vec<serde_json::Value>>,
}

impl Default for FixtureState {
    fn default() -> Self {
        Self {
            username: "teststudent".into(),
            student_id: ID::new(),
            fail_student_lookup: false,
            notifications: Vec::new(),
            fail_mark_read: false,
            class_group_subjects: Vec::new(),
            fail_class_group_list: false,
            fail_create_activity: false,
            grade_score: 87.5,
            student_lookups: Mutex::new(0),
            mark_read_requests: Mutex::new(Vec::new()),
            create_requests: Mutex::new(Vec::new()),
        }
    }
}

async fn get_student_id(
    path: web::Path<String>,
    state: web::Data<FixtureState>,
) -> HttpResponse {
    *state.student_lookups.lock().unwrap() += 1;
    if state.fail_student_lookup {
        return HttpResponse::InternalServerError().body("student lookup unavailable");
    }
    if path.into_inner() != state.username {
        return HttpResponse::NotFound().body("unknown username");
    }
    HttpResponse::Ok().json(json!({ "studentId": state.student_id }))
}

async fn query_notifications(
    body: web::Json<serde_json::Value>,
    state: web::Data<FixtureState>,
) -> HttpResponse {
    if body["studentId"] != json!(state.student_id) {
        return HttpResponse::BadRequest().body("unknown student");
    }
    HttpResponse::Ok().json(&state.notifications)
}

async fn mark_notification_read(
    body: web::Json<serde_json::Value>,
    state: web::Data<FixtureState>,
) -> HttpResponse {
    if state.fail_mark_read {
        return HttpResponse::InternalServerError().body("mark-read unavailable");
    }
    state.mark_read_requests.lock().unwrap().push(body.into_inner());
    HttpResponse::Ok().json(json!({}))
}

async fn list_class_group_subjects(state: web::Data<FixtureState>) -> HttpResponse {
    if state.fail_class_group_list {
        return HttpResponse::InternalServerError().body("class group list unavailable");
    }
    HttpResponse::Ok().json(&state.class_group_subjects)
}

async fn create_activity(
    body: web::Json<serde_json::Value>,
    state: web::Data<FixtureState>,
) -> HttpResponse {
    if state.fail_create_activity {
        return HttpResponse::InternalServerError().body("create activity unavailable");
    }
    state.create_requests.lock().unwrap().push(body.into_inner());
    HttpResponse::Created().json(json!({ "activityId": ID::new() }))
}

async fn get_upcoming_grade(
    _path: web::Path<String>,
    state: web::Data<FixtureState>,
) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "score": state.grade_score }))
}

pub struct TestApp {
    pub state: web::Data<FixtureState>,
}

// Launch the fixture backend as a background task on a random port
pub async fn spawn_app(state: FixtureState) -> (TestApp, KinderhubSDK, String) {
    let state = web::Data::new(state);
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind a random port");
    let port = listener
        .local_addr()
        .expect("Expected a local address")
        .port();
    let address = format!("http://127.0.0.1:{}", port);

    let app_state = state.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .route("/student/id/{username}", web::get().to(get_student_id))
            .route("/notifications/query", web::post().to(query_notifications))
            .route(
                "/notifications/mark-read",
                web::post().to(mark_notification_read),
            )
            .route(
                "/class-group-subjects/list",
                web::get().to(list_class_group_subjects),
            )
            .route("/activities/create", web::post().to(create_activity))
            .route("/grade/upcoming/{student_id}", web::get().to(get_upcoming_grade))
    })
    .listen(listener)
    .expect("Failed to listen on the bound port")
    .workers(1)
    .run();
    let _ = actix_web::rt::spawn(server);

    let sdk = KinderhubSDK::new(address.clone());
    (TestApp { state }, sdk, address)
}
