use giphy_client::models::{GetResponse, GifObject, SearchParams, SearchResponse};

fn sample_gif_json() -> &'static str {
    r#"{
        "id": "xT9IgDEI1iZyb2wqo8",
        "url": "https://giphy.com/gifs/sad-xT9IgDEI1iZyb2wqo8",
        "title": "Sad Cry GIF",
        "rating": "g",
        "images": {
            "original": {
                "url": "https://media.giphy.com/media/xT9IgDEI1iZyb2wqo8/giphy.gif",
                "width": "480",
                "height": "270"
            }
        }
    }"#
}

#[test]
fn test_gif_deserialization() {
    let gif: GifObject = serde_json::from_str(sample_gif_json()).unwrap();
    assert_eq!(gif.id, "xT9IgDEI1iZyb2wqo8");
    assert_eq!(gif.title, "Sad Cry GIF");
    assert_eq!(gif.rating, "g");

    let original = gif.images.original.unwrap();
    assert_eq!(
        original.url,
        "https://media.giphy.com/media/xT9IgDEI1iZyb2wqo8/giphy.gif"
    );
    assert_eq!(original.width.as_deref(), Some("480"));
    assert_eq!(original.height.as_deref(), Some("270"));
}

#[test]
fn test_search_envelope() {
    let json = format!(
        r#"{{
            "data": [{}],
            "pagination": {{"total_count": 1234, "count": 1, "offset": 0}},
            "meta": {{"status": 200, "msg": "OK", "response_id": "abc"}}
        }}"#,
        sample_gif_json()
    );

    let response: SearchResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(response.data.len(), 1);
    assert_eq!(response.data[0].id, "xT9IgDEI1iZyb2wqo8");

    let pagination = response.pagination.unwrap();
    assert_eq!(pagination.total_count, 1234);

    let meta = response.meta.unwrap();
    assert_eq!(meta.status, 200);
    assert_eq!(meta.msg, "OK");
}

#[test]
fn test_empty_search_envelope() {
    let json = r#"{"data": [], "pagination": {"total_count": 0, "count": 0, "offset": 0}, "meta": {"status": 200, "msg": "OK"}}"#;
    let response: SearchResponse = serde_json::from_str(json).unwrap();
    assert!(response.data.is_empty());
}

#[test]
fn test_get_envelope() {
    let json = format!(
        r#"{{"data": {}, "meta": {{"status": 200, "msg": "OK"}}}}"#,
        sample_gif_json()
    );

    let response: GetResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(response.data.unwrap().id, "xT9IgDEI1iZyb2wqo8");
}

#[test]
fn test_get_envelope_without_data() {
    let json = r#"{"meta": {"status": 404, "msg": "Not Found"}}"#;
    let response: GetResponse = serde_json::from_str(json).unwrap();
    assert!(response.data.is_none());
    assert_eq!(response.meta.unwrap().status, 404);
}

#[test]
fn test_optional_fields_default() {
    let json = r#"{"id": "abc123"}"#;
    let gif: GifObject = serde_json::from_str(json).unwrap();
    assert_eq!(gif.id, "abc123");
    assert!(gif.title.is_empty());
    assert!(gif.images.original.is_none());
}

#[test]
fn test_missing_id_is_rejected() {
    let json = r#"{"title": "No id here"}"#;
    let result = serde_json::from_str::<GifObject>(json);
    assert!(result.is_err());
}

#[test]
fn test_invalid_json() {
    let result = serde_json::from_str::<SearchResponse>("not json at all");
    assert!(result.is_err());
}

#[test]
fn test_search_params_defaults() {
    let params = SearchParams::default();
    assert_eq!(params.limit, 10);
    assert_eq!(params.rating, "g");
}

#[test]
fn test_search_params_builder() {
    let params = SearchParams::new().limit(25).rating("pg-13");
    assert_eq!(params.limit, 25);
    assert_eq!(params.rating, "pg-13");
}

#[test]
fn test_search_params_query_params() {
    let params = SearchParams::new().limit(5);
    let query_params = params.to_query_params("sad");

    assert_eq!(
        query_params,
        vec![
            ("q".to_string(), "sad".to_string()),
            ("limit".to_string(), "5".to_string()),
            ("rating".to_string(), "g".to_string()),
        ]
    );
}
