use crate::router::handle;
use crate::tests::utils::{body_string, get, make_ctx, post_multipart, StubApi};

const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0, 1, 2, 3];

fn valid_agent_fields<'a>() -> Vec<(&'a str, &'a str)> {
    vec![
        ("name", "ანა"),
        ("surname", "კაპანაძე"),
        ("email", "ana@redberry.ge"),
        ("phone", "599123456"),
    ]
}

fn valid_listing_fields<'a>() -> Vec<(&'a str, &'a str)> {
    vec![
        ("address", "ვაჟა-ფშაველას 71"),
        ("zip_code", "0186"),
        ("region_id", "1"),
        ("city_id", "10"),
        ("price", "150000"),
        ("area", "55.5"),
        ("bedrooms", "2"),
        ("description", "ახალი რემონტი ორი საძინებელი დიდი აივანი"),
        ("is_rental", "0"),
        ("agent_id", "7"),
    ]
}

#[test]
fn valid_agent_submission_reaches_the_api_and_redirects() {
    let stub = StubApi::seeded();
    let created = stub.created_agents.clone();
    let ctx = make_ctx(stub, false);

    let req = post_multipart(
        "/new-agent",
        &valid_agent_fields(),
        &[("avatar", "me.png", "image/png", PNG_BYTES)],
    );

    let resp = handle(req, &ctx).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(*created.lock().unwrap(), vec!["ana@redberry.ge"]);
}

#[test]
fn missing_avatar_keeps_the_gate_closed() {
    let stub = StubApi::seeded();
    let created = stub.created_agents.clone();
    let ctx = make_ctx(stub, false);

    let req = post_multipart("/new-agent", &valid_agent_fields(), &[]);

    // re-rendered form, not a redirect, and no API call
    let resp = handle(req, &ctx).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(created.lock().unwrap().is_empty());
}

#[test]
fn invalid_email_re_renders_with_the_value_preserved() {
    let stub = StubApi::seeded();
    let created = stub.created_agents.clone();
    let ctx = make_ctx(stub, false);

    let mut fields = valid_agent_fields();
    fields[2] = ("email", "ana@gmail.com");

    let req = post_multipart(
        "/new-agent",
        &fields,
        &[("avatar", "me.png", "image/png", PNG_BYTES)],
    );

    let resp = handle(req, &ctx).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("ana@gmail.com"));
    assert!(body.contains("ანა"));
    assert!(created.lock().unwrap().is_empty());
}

#[test]
fn api_rejection_surfaces_the_message_and_preserves_the_form() {
    let mut stub = StubApi::seeded();
    stub.reject_creates = true;
    let ctx = make_ctx(stub, false);

    let req = post_multipart(
        "/new-agent",
        &valid_agent_fields(),
        &[("avatar", "me.png", "image/png", PNG_BYTES)],
    );

    let resp = handle(req, &ctx).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("The given data was invalid."));
    assert!(body.contains("ana@redberry.ge"));
}

#[test]
fn oversized_image_blocks_a_listing_submission() {
    let stub = StubApi::seeded();
    let created = stub.created_listings.clone();
    let ctx = make_ctx(stub, false);

    let big = vec![0u8; 1_048_577];
    let req = post_multipart(
        "/new-listing",
        &valid_listing_fields(),
        &[("image", "big.png", "image/png", &big)],
    );

    let resp = handle(req, &ctx).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(created.lock().unwrap().is_empty());
}

#[test]
fn valid_listing_submission_posts_and_clears_the_draft() {
    let stub = StubApi::seeded();
    let created = stub.created_listings.clone();
    let ctx = make_ctx(stub, true);

    // an earlier abandoned visit leaves a draft behind
    let partial = post_multipart(
        "/new-listing",
        &[("address", "დაუმთავრებელი 12")],
        &[],
    );
    assert_eq!(handle(partial, &ctx).unwrap().status(), 200);

    let restored = body_string(handle(get("/new-listing"), &ctx).unwrap());
    assert!(restored.contains("დაუმთავრებელი 12"));

    // the successful submit replaces it and clears the store
    let req = post_multipart(
        "/new-listing",
        &valid_listing_fields(),
        &[("image", "flat.jpg", "image/jpeg", PNG_BYTES)],
    );
    let resp = handle(req, &ctx).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(*created.lock().unwrap(), vec!["ვაჟა-ფშაველას 71"]);

    let fresh = body_string(handle(get("/new-listing"), &ctx).unwrap());
    assert!(!fresh.contains("დაუმთავრებელი 12"));
    assert!(!fresh.contains("ვაჟა-ფშაველას 71"));
}

#[test]
fn drafts_are_not_kept_when_persistence_is_off() {
    let ctx = make_ctx(StubApi::seeded(), false);

    let partial = post_multipart(
        "/new-listing",
        &[("address", "დროებითი 1")],
        &[],
    );
    assert_eq!(handle(partial, &ctx).unwrap().status(), 200);

    let fresh = body_string(handle(get("/new-listing"), &ctx).unwrap());
    assert!(!fresh.contains("დროებითი 1"));
}
