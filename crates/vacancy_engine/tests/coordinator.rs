use std::sync::Once;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use vacancy_core::{CategoryOption, FetchPhase, Msg};
use vacancy_engine::{ClientSettings, EngineHandle, ListingCoordinator};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(listing_logging::initialize_for_tests);
}

fn coordinator_for(server: &MockServer) -> ListingCoordinator {
    let settings = ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    };
    let engine = EngineHandle::new(settings).expect("engine");
    ListingCoordinator::new(engine)
}

fn vacancy_body(items: &[(&str, &str)], total_pages: u32) -> serde_json::Value {
    let results: Vec<serde_json::Value> = items
        .iter()
        .enumerate()
        .map(|(index, (slug, title))| {
            json!({
                "id": index + 1,
                "slug": slug,
                "title": title,
                "job_type": "Toliq stavka",
                "branch": { "city_name": "Toshkent" },
                "created_date": "2024-05-17",
                "description": "",
                "tags": []
            })
        })
        .collect();
    json!({ "results": results, "total_pages": total_pages })
}

async fn mount_option_mocks(server: &MockServer, language: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{language}/categories/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "id": 5, "name": "Bank ishi" }]
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/{language}/branches/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "id": 7, "name": "Bosh ofis", "city_name": "Toshkent" }]
        })))
        .mount(server)
        .await;
}

async fn pump_until(
    coordinator: &mut ListingCoordinator,
    mut done: impl FnMut(&ListingCoordinator) -> bool,
) {
    for _ in 0..300 {
        coordinator.pump();
        if done(coordinator) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("engine did not settle in time");
}

fn titles(coordinator: &ListingCoordinator) -> Vec<String> {
    coordinator
        .state()
        .vacancies()
        .iter()
        .map(|vacancy| vacancy.title.clone())
        .collect()
}

#[tokio::test]
async fn mount_populates_list_options_and_total() {
    init_logging();
    let server = MockServer::start().await;
    mount_option_mocks(&server, "uz").await;
    Mock::given(method("GET"))
        .and(path("/uz/vacancies"))
        .and(query_param("page", "1"))
        .and(query_param_is_missing("category"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vacancy_body(
            &[("kassir", "Kassir"), ("operator", "Operator")],
            3,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let mut coordinator = coordinator_for(&server);
    coordinator.start();
    pump_until(&mut coordinator, |c| {
        c.state().phase() == FetchPhase::Loaded && !c.view().direction_options.is_empty()
    })
    .await;

    let view = coordinator.view();
    assert_eq!(titles(&coordinator), vec!["Kassir", "Operator"]);
    assert_eq!(view.page, 1);
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.direction_options[0], CategoryOption::all("Barchasi"));
    assert_eq!(view.direction_options[1].label, "Bank ishi");
    assert_eq!(view.branch_options[1].label, "Toshkent");
}

#[tokio::test]
async fn superseded_response_never_lands() {
    init_logging();
    let server = MockServer::start().await;
    mount_option_mocks(&server, "uz").await;
    Mock::given(method("GET"))
        .and(path("/uz/vacancies"))
        .and(query_param_is_missing("category"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(vacancy_body(&[("boshlangich", "Boshlangich royxat")], 1)),
        )
        .mount(&server)
        .await;
    // The older of two rapid filter changes answers slowly.
    Mock::given(method("GET"))
        .and(path("/uz/vacancies"))
        .and(query_param("category", "5"))
        .and(query_param_is_missing("branch"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(300))
                .set_body_json(vacancy_body(&[("eski", "Eski natija")], 9)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/uz/vacancies"))
        .and(query_param("category", "5"))
        .and(query_param("branch", "7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(vacancy_body(&[("yangi", "Yangi natija")], 2)),
        )
        .mount(&server)
        .await;

    let mut coordinator = coordinator_for(&server);
    coordinator.start();
    pump_until(&mut coordinator, |c| {
        c.state().phase() == FetchPhase::Loaded
    })
    .await;

    coordinator.dispatch(Msg::DirectionSelected(CategoryOption::new("5", "Bank ishi")));
    coordinator.dispatch(Msg::BranchSelected(CategoryOption::new("7", "Toshkent")));
    pump_until(&mut coordinator, |c| {
        c.state().phase() == FetchPhase::Loaded
    })
    .await;
    assert_eq!(titles(&coordinator), vec!["Yangi natija"]);

    // Wait past the slow response's delay; it must remain unobservable.
    tokio::time::sleep(Duration::from_millis(400)).await;
    coordinator.pump();
    assert_eq!(titles(&coordinator), vec!["Yangi natija"]);
    assert_eq!(coordinator.view().total_pages, 2);
}

#[tokio::test]
async fn failure_keeps_controls_interactive() {
    init_logging();
    let server = MockServer::start().await;
    mount_option_mocks(&server, "uz").await;
    Mock::given(method("GET"))
        .and(path("/uz/vacancies"))
        .and(query_param_is_missing("search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/uz/vacancies"))
        .and(query_param("search", "kassir"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(vacancy_body(&[("kassir", "Kassir")], 1)),
        )
        .mount(&server)
        .await;

    let mut coordinator = coordinator_for(&server);
    coordinator.start();
    pump_until(&mut coordinator, |c| {
        c.state().phase() == FetchPhase::Failed
    })
    .await;
    assert!(coordinator.state().vacancies().is_empty());

    // Submitting a search from the failed state recovers.
    coordinator.dispatch(Msg::SearchDraftChanged("kassir".to_string()));
    coordinator.dispatch(Msg::SearchSubmitted);
    pump_until(&mut coordinator, |c| {
        c.state().phase() == FetchPhase::Loaded
    })
    .await;
    assert_eq!(titles(&coordinator), vec!["Kassir"]);
}

#[tokio::test]
async fn language_change_reloads_options_and_list() {
    init_logging();
    let server = MockServer::start().await;
    mount_option_mocks(&server, "uz").await;
    Mock::given(method("GET"))
        .and(path("/uz/vacancies"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(vacancy_body(&[("kassir", "Kassir")], 1)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ru/categories/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "id": 5, "name": "Банковское дело" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ru/branches/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "id": 7, "city_name": "Ташкент" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ru/vacancies"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(vacancy_body(&[("kassir-ru", "Кассир")], 1)),
        )
        .mount(&server)
        .await;

    let mut coordinator = coordinator_for(&server);
    coordinator.start();
    pump_until(&mut coordinator, |c| {
        c.state().phase() == FetchPhase::Loaded && !c.view().direction_options.is_empty()
    })
    .await;
    assert_eq!(
        coordinator.view().direction_options[0],
        CategoryOption::all("Barchasi")
    );

    coordinator.dispatch(Msg::LanguageChanged("ru".to_string()));
    pump_until(&mut coordinator, |c| {
        let view = c.view();
        view.direction_options.first() == Some(&CategoryOption::all("Все"))
            && c.state().phase() == FetchPhase::Loaded
    })
    .await;

    let view = coordinator.view();
    assert_eq!(view.direction_options[1].label, "Банковское дело");
    assert_eq!(view.branch_options[1].label, "Ташкент");
    assert_eq!(titles(&coordinator), vec!["Кассир"]);
}
