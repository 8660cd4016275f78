use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_ctx, StubApi};

#[test]
fn home_renders_every_listing_when_no_filter_is_set() {
    let ctx = make_ctx(StubApi::seeded(), false);

    let resp = handle(get("/"), &ctx).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    for address in ["misamarti-1", "misamarti-2", "misamarti-3"] {
        assert!(body.contains(address), "missing {address}");
    }
}

#[test]
fn price_min_filter_narrows_the_grid() {
    let ctx = make_ctx(StubApi::seeded(), false);

    let resp = handle(get("/?price_min=100000"), &ctx).unwrap();
    let body = body_string(resp);

    assert!(!body.contains("misamarti-1"));
    assert!(body.contains("misamarti-2"));
    assert!(body.contains("misamarti-3"));
}

#[test]
fn two_active_criteria_show_the_union_of_their_matches() {
    let ctx = make_ctx(StubApi::seeded(), false);

    // price >= 200000 matches only listing 3; bedrooms == 1 only listing 1.
    let resp = handle(get("/?price_min=200000&bedrooms=1"), &ctx).unwrap();
    let body = body_string(resp);

    assert!(body.contains("misamarti-1"));
    assert!(!body.contains("misamarti-2"));
    assert!(body.contains("misamarti-3"));
}

#[test]
fn region_filter_matches_by_region_name() {
    let ctx = make_ctx(StubApi::seeded(), false);

    let resp = handle(get("/?region=Kakheti"), &ctx).unwrap();
    let body = body_string(resp);

    assert!(!body.contains("misamarti-1"));
    assert!(!body.contains("misamarti-2"));
    assert!(body.contains("misamarti-3"));
}

#[test]
fn clearing_the_filter_restores_the_full_grid() {
    let ctx = make_ctx(StubApi::seeded(), false);

    let filtered = body_string(handle(get("/?price_min=100000"), &ctx).unwrap());
    assert!(!filtered.contains("misamarti-1"));

    // "clear" is just the bare URL
    let cleared = body_string(handle(get("/"), &ctx).unwrap());
    for address in ["misamarti-1", "misamarti-2", "misamarti-3"] {
        assert!(cleared.contains(address));
    }
}

#[test]
fn detail_page_shows_the_listing_and_its_related_ones() {
    let ctx = make_ctx(StubApi::seeded(), false);

    let resp = handle(get("/listing/1"), &ctx).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("misamarti-1"));
    // listing 2 shares the region, listing 3 does not
    assert!(body.contains("misamarti-2"));
    assert!(!body.contains("misamarti-3"));
}

#[test]
fn unknown_listing_id_is_not_found() {
    let ctx = make_ctx(StubApi::seeded(), false);

    assert!(matches!(
        handle(get("/listing/999"), &ctx),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        handle(get("/listing/abc"), &ctx),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn unknown_route_is_not_found() {
    let ctx = make_ctx(StubApi::seeded(), false);

    assert!(matches!(
        handle(get("/nope"), &ctx),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn delete_relays_to_the_api_and_redirects_home() {
    let stub = StubApi::seeded();
    let deleted = stub.deleted.clone();
    let ctx = make_ctx(stub, false);

    let mut req = get("/listing/2/delete");
    *req.method_mut() = http::Method::POST;

    let resp = handle(req, &ctx).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/"
    );
    assert_eq!(*deleted.lock().unwrap(), vec![2]);
}
