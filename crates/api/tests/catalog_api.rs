//! HTTP-level integration tests for the catalog endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener. The embedded migrations seed the catalog
//! (Human/Elf/Dwarf, Warrior/Wizard/Thief), so assertions target that data.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_races_returns_full_collection(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/races").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Human", "Elf", "Dwarf"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_classes_returns_full_collection(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/classes").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_skills_returns_full_collection(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/skills").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 8);
}

// ---------------------------------------------------------------------------
// By id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_race_by_id_returns_matching_record(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/races/2").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], 2);
    assert_eq!(json["name"], "Elf");

    // Associations are loaded and serialized in snake_case.
    let recommended: Vec<&str> = json["recommended_classes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(recommended, ["Thief"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_class_by_id_includes_proficiencies_and_skills(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/classes/2").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], 2);
    assert_eq!(json["role"], "spellcaster");
    assert_eq!(
        json["proficiencies"],
        serde_json::json!(["cast_magic", "read_magic"])
    );
    assert_eq!(json["starting_skills"][0]["name"], "Fireball");
    assert_eq!(json["bonus_attributes"]["intelligence"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_skill_by_id_includes_prerequisites(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/skills/3").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Hellfire");
    assert_eq!(json["type"], "spell");
    assert_eq!(json["level_requirement"], "advanced");
    assert_eq!(json["skill_requirement"][0]["name"], "Fireball");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_by_unknown_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/races/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = get(app, "/skills/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_by_non_numeric_id_returns_400_echoing_the_value(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/classes/not-a-number").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(
        json["error"].as_str().unwrap().contains("not-a-number"),
        "400 body must echo the invalid value: {json}"
    );
}

// ---------------------------------------------------------------------------
// Attribute filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn classes_by_role_is_case_insensitive(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/classes/by-role/FIGHTER").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json[0]["name"], "Warrior");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn classes_by_unknown_role_returns_empty_array(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/classes/by-role/bard").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn skills_by_type_filters_the_collection(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/skills/by-type/spell").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Fireball", "Hellfire"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn skills_by_source_filters_the_collection(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/skills/by-source/Race").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Mountain Vigor", "Keen Senses"]);
}

// ---------------------------------------------------------------------------
// Set-membership filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn classes_by_proficiencies_matches_case_insensitively(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/classes/by-proficiencies?proficiencies=CAST_MAGIC").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Wizard"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn classes_by_repeated_proficiencies_deduplicates(pool: PgPool) {
    // Warrior matches both simple_weapons and complex_weapons but must
    // appear once; Thief matches simple_weapons.
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/classes/by-proficiencies?proficiencies=simple_weapons&proficiencies=complex_weapons",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Warrior", "Thief"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn classes_by_proficiencies_without_param_returns_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/classes/by-proficiencies").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn races_by_recommended_classes_returns_matching_races(pool: PgPool) {
    // Human recommends all classes, Elf only Thief: "thief" -> {Human, Elf}.
    let app = common::build_test_app(pool);
    let response = get(app, "/races/by-recommended-classes?classes=thief").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Human", "Elf"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn races_by_recommended_classes_without_param_returns_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/races/by-recommended-classes").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!([]));
}
