mod support;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use backend::services;
use serde_json::Value;
use support::{install_failing_trigger, store_is_unlocked, temp_store};

macro_rules! app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($store.clone()))
                .configure(services::configure),
        )
        .await
    };
}

fn venue_form(name: &str) -> Vec<(&str, &str)> {
    vec![
        ("name", name),
        ("city", "San Francisco"),
        ("state", "CA"),
        ("address", "1805 Geary Blvd"),
        ("phone", "415-346-3000"),
        ("genres", "Rock n Roll"),
        ("genres", "Funk"),
        ("website", ""),
        ("facebook_link", ""),
        ("image_link", ""),
        ("seeking_talent", "Yes"),
        ("seeking_description", ""),
    ]
}

fn artist_form(name: &str) -> Vec<(&str, &str)> {
    vec![
        ("name", name),
        ("city", "Oakland"),
        ("state", "CA"),
        ("genres", "Jazz"),
        ("seeking_venue", "No"),
    ]
}

fn created_id(body: &Value) -> i64 {
    body["data"]["id"].as_i64().expect("created id")
}

#[actix_web::test]
async fn unknown_venue_renders_not_found_page() {
    let (_dir, store) = temp_store();
    let app = app!(store);

    for uri in ["/venues/999", "/venues/abc", "/venues/99999999999999999999999", "/nowhere"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["template"], "errors/404", "{uri}");
    }
}

#[actix_web::test]
async fn create_then_browse_search_and_view_a_venue() {
    let (_dir, store) = temp_store();
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/venues/create")
        .set_form(venue_form("The Fillmore"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["template"], "pages/home");
    assert_eq!(body["notices"][0]["level"], "success");
    assert_eq!(
        body["notices"][0]["message"],
        "Venue The Fillmore was successfully listed!"
    );
    let id = created_id(&body);

    let areas: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/venues").to_request(),
    )
    .await;
    assert_eq!(areas["data"][0]["city"], "San Francisco");
    assert_eq!(areas["data"][0]["venues"][0]["name"], "The Fillmore");

    let found: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/venues/search")
            .set_form([("search_term", "FILL")])
            .to_request(),
    )
    .await;
    assert_eq!(found["data"]["count"], 1);
    assert_eq!(found["data"]["data"][0]["id"], id);

    let page: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri(&format!("/venues/{id}")).to_request(),
    )
    .await;
    assert_eq!(page["template"], "pages/show_venue");
    assert_eq!(page["data"]["name"], "The Fillmore");
    assert_eq!(page["data"]["genres"][1], "Funk");
    assert_eq!(page["data"]["seeking_talent"], true);
    assert_eq!(page["data"]["past_shows_count"], 0);
    assert_eq!(page["data"]["upcoming_shows_count"], 0);
    assert!(store_is_unlocked(&store));
}

#[actix_web::test]
async fn search_without_term_lists_everything() {
    let (_dir, store) = temp_store();
    let app = app!(store);

    for name in ["Guns N Petals", "Matt Quevedo"] {
        let req = test::TestRequest::post()
            .uri("/artists/create")
            .set_form(artist_form(name))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let found: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/artists/search")
            .set_form(Vec::<(&str, &str)>::new())
            .to_request(),
    )
    .await;
    assert_eq!(found["data"]["count"], 2);

    let listed: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/artists").to_request(),
    )
    .await;
    assert_eq!(listed["data"][1]["name"], "Matt Quevedo");
}

#[actix_web::test]
async fn invalid_submission_renders_the_form_again() {
    let (_dir, store) = temp_store();
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/venues/create")
        .set_form([("name", "Nowhere"), ("state", "ZZ")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["template"], "forms/new_venue");
    assert_eq!(body["notices"][0]["level"], "error");
    assert_eq!(body["data"]["values"]["name"][0], "Nowhere");
    let fields: Vec<&str> = body["data"]["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["city", "state", "address", "genres"]);
}

#[actix_web::test]
async fn show_against_missing_artist_fails_without_a_row() {
    let (_dir, store) = temp_store();
    let app = app!(store);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/venues/create")
            .set_form(venue_form("The Fillmore"))
            .to_request(),
    )
    .await;
    let venue_id = created_id(&test::read_body_json(resp).await).to_string();

    let req = test::TestRequest::post()
        .uri("/shows/create")
        .set_form([
            ("artist_id", "77"),
            ("venue_id", venue_id.as_str()),
            ("start_time", "2035-04-01 20:00:00"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["template"], "forms/new_show");
    assert_eq!(
        body["notices"][0]["message"],
        "An error occurred. Show could not be listed."
    );

    let shows: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/shows").to_request(),
    )
    .await;
    assert_eq!(shows["data"].as_array().unwrap().len(), 0);
    assert!(store_is_unlocked(&store));
}

#[actix_web::test]
async fn booked_show_appears_on_both_pages_and_listing() {
    let (_dir, store) = temp_store();
    let app = app!(store);

    let venue: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/venues/create")
            .set_form(venue_form("The Fillmore"))
            .to_request(),
    )
    .await;
    let artist: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/artists/create")
            .set_form(artist_form("Guns N Petals"))
            .to_request(),
    )
    .await;
    let (venue_id, artist_id) = (created_id(&venue), created_id(&artist));
    let (venue_text, artist_text) = (venue_id.to_string(), artist_id.to_string());

    let req = test::TestRequest::post()
        .uri("/shows/create")
        .set_form([
            ("artist_id", artist_text.as_str()),
            ("venue_id", venue_text.as_str()),
            ("start_time", "2099-04-01T20:00"),
        ])
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created["notices"][0]["message"], "Show was successfully listed!");

    let listing: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/shows").to_request(),
    )
    .await;
    assert_eq!(listing["data"][0]["venue_name"], "The Fillmore");
    assert_eq!(listing["data"][0]["artist_name"], "Guns N Petals");
    assert_eq!(listing["data"][0]["start_time"], "2099-04-01 20:00:00");

    let venue_page: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/venues/{venue_id}"))
            .to_request(),
    )
    .await;
    assert_eq!(venue_page["data"]["upcoming_shows_count"], 1);
    assert_eq!(
        venue_page["data"]["upcoming_shows"][0]["counterpart_id"],
        artist_id
    );

    let artist_page: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/artists/{artist_id}"))
            .to_request(),
    )
    .await;
    assert_eq!(artist_page["data"]["upcoming_shows_count"], 1);
    assert_eq!(
        artist_page["data"]["upcoming_shows"][0]["counterpart_name"],
        "The Fillmore"
    );
    assert_eq!(artist_page["data"]["past_shows_count"], 0);
}

#[actix_web::test]
async fn edit_form_is_prefilled_and_submission_uses_key_presence() {
    let (_dir, store) = temp_store();
    let app = app!(store);

    let created: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/venues/create")
            .set_form(venue_form("The Fillmore"))
            .to_request(),
    )
    .await;
    let id = created_id(&created);

    let prefilled: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/venues/{id}/edit"))
            .to_request(),
    )
    .await;
    assert_eq!(prefilled["template"], "forms/edit_venue");
    assert_eq!(prefilled["data"]["id"], id);
    assert_eq!(prefilled["data"]["values"]["seeking_talent"], true);
    assert!(prefilled["data"]["choices"]["states"].as_array().unwrap().len() > 50);

    let mut resubmission = venue_form("The Fillmore West");
    resubmission.retain(|(key, _)| *key != "seeking_talent");
    let req = test::TestRequest::post()
        .uri(&format!("/venues/{id}/edit"))
        .set_form(resubmission)
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["template"], "pages/show_venue");
    assert_eq!(updated["data"]["name"], "The Fillmore West");
    assert_eq!(updated["data"]["seeking_talent"], false);

    let missing = test::call_service(
        &app,
        test::TestRequest::get().uri("/venues/500/edit").to_request(),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_succeeds_whether_or_not_the_venue_exists() {
    let (_dir, store) = temp_store();
    let app = app!(store);

    let created: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/venues/create")
            .set_form(venue_form("The Fillmore"))
            .to_request(),
    )
    .await;
    let id = created_id(&created);

    let gone = test::call_service(
        &app,
        test::TestRequest::delete().uri("/venues/4242").to_request(),
    )
    .await;
    assert_eq!(gone.status(), StatusCode::OK);

    let deleted: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/venues/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(
        deleted["notices"][0]["message"],
        "Venue The Fillmore was successfully deleted."
    );

    let after = test::call_service(
        &app,
        test::TestRequest::get().uri(&format!("/venues/{id}")).to_request(),
    )
    .await;
    assert_eq!(after.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn failed_venue_edit_renders_the_stored_record() {
    let (_dir, store) = temp_store();
    let app = app!(store);

    let created: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/venues/create")
            .set_form(venue_form("The Fillmore"))
            .to_request(),
    )
    .await;
    let id = created_id(&created);
    install_failing_trigger(&store.connect().unwrap(), "venues");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/venues/{id}/edit"))
            .set_form(venue_form("Explode"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["template"], "forms/edit_venue");
    assert_eq!(body["notices"][0]["level"], "error");
    assert_eq!(
        body["notices"][0]["message"],
        "An error occurred! Venue Explode could not be changed."
    );
    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["values"]["name"], "The Fillmore");
    assert!(store_is_unlocked(&store));

    let page: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri(&format!("/venues/{id}")).to_request(),
    )
    .await;
    assert_eq!(page["data"]["name"], "The Fillmore");
}

#[actix_web::test]
async fn artist_create_edit_and_delete_routes() {
    let (_dir, store) = temp_store();
    let app = app!(store);

    let created: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/artists/create")
            .set_form(artist_form("Guns N Petals"))
            .to_request(),
    )
    .await;
    assert_eq!(created["template"], "pages/home");
    assert_eq!(
        created["notices"][0]["message"],
        "Artist Guns N Petals was successfully listed!"
    );
    let id = created_id(&created);

    // "No" is not "Yes" on create.
    let page: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri(&format!("/artists/{id}")).to_request(),
    )
    .await;
    assert_eq!(page["template"], "pages/show_artist");
    assert_eq!(page["data"]["seeking_venue"], false);

    // On edit the key counts, whatever its value.
    let updated: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri(&format!("/artists/{id}/edit"))
            .set_form(artist_form("Guns N Roses"))
            .to_request(),
    )
    .await;
    assert_eq!(updated["template"], "pages/show_artist");
    assert_eq!(
        updated["notices"][0]["message"],
        "Artist Guns N Roses was successfully updated!"
    );
    assert_eq!(updated["data"]["name"], "Guns N Roses");
    assert_eq!(updated["data"]["seeking_venue"], true);

    let mut without_flag = artist_form("Guns N Roses");
    without_flag.retain(|(key, _)| *key != "seeking_venue");
    let cleared: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri(&format!("/artists/{id}/edit"))
            .set_form(without_flag)
            .to_request(),
    )
    .await;
    assert_eq!(cleared["data"]["seeking_venue"], false);

    let prefilled: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/artists/{id}/edit"))
            .to_request(),
    )
    .await;
    assert_eq!(prefilled["template"], "forms/edit_artist");
    assert_eq!(prefilled["data"]["values"]["name"], "Guns N Roses");
    assert_eq!(prefilled["data"]["values"]["seeking_venue"], false);

    let deleted: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/artists/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(
        deleted["notices"][0]["message"],
        "Artist Guns N Roses was successfully deleted."
    );

    let after = test::call_service(
        &app,
        test::TestRequest::get().uri(&format!("/artists/{id}")).to_request(),
    )
    .await;
    assert_eq!(after.status(), StatusCode::NOT_FOUND);

    let again: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/artists/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(
        again["notices"][0]["message"],
        format!("Artist {id} was already gone.")
    );
    assert!(store_is_unlocked(&store));
}
