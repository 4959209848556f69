use roadside::models::Coordinates;
use roadside::services::route_sampler;
use roadside::AppError;
use std::sync::atomic::Ordering;
use std::sync::Arc;

mod common;

use common::{corridor_places, directions_ok, directions_status, finder_with, place_near, test_path, FakeWorld};

// Dense sampling keeps every corridor place inside some search circle
const STEP_KM: f64 = 10.0;
const RADIUS_KM: f64 = 12.0;
const CORRIDOR_KM: f64 = 20.0;

#[tokio::test]
async fn test_compute_route_normalizes_directions() {
    let finder = finder_with(directions_ok(), Arc::new(FakeWorld::new(vec![])));

    let route = finder
        .compute_route("San Diego, CA", "Phoenix, AZ")
        .await
        .expect("route should resolve");

    assert_eq!(route.start_label, "San Diego, CA, USA");
    assert_eq!(route.end_label, "Phoenix, AZ, USA");
    assert_eq!(route.total_km, 571.234);
    assert_eq!(route.total_hours, 5.43);
    assert_eq!(route.path.len(), test_path().len());
    for (decoded, original) in route.path.iter().zip(test_path()) {
        assert!((decoded.lat - original.lat).abs() < 1e-5);
        assert!((decoded.lng - original.lng).abs() < 1e-5);
    }
}

#[tokio::test]
async fn test_compute_route_surfaces_upstream_status() {
    let finder = finder_with(directions_status("ZERO_RESULTS"), Arc::new(FakeWorld::new(vec![])));

    let err = finder
        .compute_route("Honolulu, HI", "Tokyo, Japan")
        .await
        .unwrap_err();

    match err {
        AppError::RouteUnavailable(msg) => assert!(msg.contains("ZERO_RESULTS"), "{}", msg),
        other => panic!("expected RouteUnavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_find_attractions_ranks_and_dedupes() {
    let world = Arc::new(FakeWorld::new(corridor_places()));
    let finder = finder_with(directions_ok(), world.clone());

    let picks = finder
        .find_attractions(&test_path(), STEP_KM, RADIUS_KM, 10, CORRIDOR_KM)
        .await
        .unwrap();

    let names: Vec<&str> = picks.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "heard museum",
            "Cuyamaca Rancho State Park",
            "Imperial Sand Dunes",
            "Desert View Tower",
            "Yuma Territorial Prison",
            "Painted Rock Petroglyph Site",
        ]
    );

    // One lookup per sample point
    let samples = route_sampler::sample(&test_path(), STEP_KM);
    assert_eq!(world.calls.load(Ordering::SeqCst), samples.len());

    for pick in &picks {
        assert!(pick.distance_from_route_km <= 5.01, "{} is {}km off", pick.name, pick.distance_from_route_km);
        assert!(pick.reviews > 0);
        assert!(pick.maps_uri.starts_with("https://maps.google.com/"));
        assert_eq!(pick.place_type, "tourist_attraction");
    }
}

#[tokio::test]
async fn test_find_attractions_truncates_to_want() {
    let finder = finder_with(directions_ok(), Arc::new(FakeWorld::new(corridor_places())));

    let picks = finder
        .find_attractions(&test_path(), STEP_KM, RADIUS_KM, 3, CORRIDOR_KM)
        .await
        .unwrap();

    assert_eq!(picks.len(), 3);
    assert_eq!(picks[0].name, "heard museum");
}

#[tokio::test]
async fn test_fewer_unique_names_than_requested_is_not_padded() {
    let places = corridor_places().into_iter().take(5).collect();
    let finder = finder_with(directions_ok(), Arc::new(FakeWorld::new(places)));

    let picks = finder
        .find_attractions(&test_path(), STEP_KM, RADIUS_KM, 8, CORRIDOR_KM)
        .await
        .unwrap();

    assert_eq!(picks.len(), 5);
}

#[tokio::test]
async fn test_no_nearby_results_gives_empty_list() {
    let world = Arc::new(FakeWorld::new(vec![]));
    let finder = finder_with(directions_ok(), world.clone());

    let picks = finder
        .find_attractions(&test_path(), 60.0, RADIUS_KM, 8, CORRIDOR_KM)
        .await
        .unwrap();

    assert!(picks.is_empty());
    assert!(world.calls.load(Ordering::SeqCst) >= 2);
}

#[tokio::test]
async fn test_places_beyond_corridor_are_penalized() {
    let path = test_path();
    let places = vec![
        // Excellent but 25 km off the route: 4.5 - 1.0 penalty
        place_near("far", "Remote Canyon Overlook", path[1], 25.0, 4.5, 100),
        place_near("near", "Roadside Diner Mural", path[1], 0.5, 3.9, 100),
    ];
    let finder = finder_with(directions_ok(), Arc::new(FakeWorld::new(places)));

    let picks = finder
        .find_attractions(&path, STEP_KM, 30.0, 8, CORRIDOR_KM)
        .await
        .unwrap();

    assert_eq!(picks.len(), 2);
    assert_eq!(picks[0].name, "Roadside Diner Mural");
    assert_eq!(picks[1].name, "Remote Canyon Overlook");
    assert!((picks[1].distance_from_route_km - 25.0).abs() < 0.05);

    // A wider corridor removes the penalty and restores the rating order
    let finder = finder_with(
        directions_ok(),
        Arc::new(FakeWorld::new(vec![
            place_near("far", "Remote Canyon Overlook", path[1], 25.0, 4.5, 100),
            place_near("near", "Roadside Diner Mural", path[1], 0.5, 3.9, 100),
        ])),
    );
    let picks = finder
        .find_attractions(&path, STEP_KM, 30.0, 8, 30.0)
        .await
        .unwrap();
    assert_eq!(picks[0].name, "Remote Canyon Overlook");
}

#[tokio::test]
async fn test_failed_lookup_aborts_search() {
    let world = Arc::new(FakeWorld {
        fail_on_call: Some(2),
        ..FakeWorld::new(corridor_places())
    });
    let finder = finder_with(directions_ok(), world.clone());

    let err = finder
        .find_attractions(&test_path(), STEP_KM, RADIUS_KM, 8, CORRIDOR_KM)
        .await
        .unwrap_err();

    match err {
        AppError::UpstreamLookup(msg) => assert!(msg.contains("503"), "{}", msg),
        other => panic!("expected UpstreamLookup, got {:?}", other),
    }
    assert_eq!(world.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_invalid_parameters_are_rejected() {
    let finder = finder_with(directions_ok(), Arc::new(FakeWorld::new(corridor_places())));
    let path = test_path();

    let err = finder.find_attractions(&path, 0.0, RADIUS_KM, 8, CORRIDOR_KM).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidRequest(_)));

    let err = finder.find_attractions(&path, STEP_KM, -1.0, 8, CORRIDOR_KM).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidRequest(_)));

    let err = finder.find_attractions(&path, STEP_KM, RADIUS_KM, 8, -0.5).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidRequest(_)));
}

#[tokio::test]
async fn test_empty_path_finds_nothing() {
    let world = Arc::new(FakeWorld::new(corridor_places()));
    let finder = finder_with(directions_ok(), world.clone());

    let picks = finder
        .find_attractions(&Vec::<Coordinates>::new(), STEP_KM, RADIUS_KM, 8, CORRIDOR_KM)
        .await
        .unwrap();

    assert!(picks.is_empty());
    assert_eq!(world.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_single_point_path_measures_against_that_point() {
    let stop = Coordinates { lat: 33.44838, lng: -112.07404 };
    let world = Arc::new(FakeWorld::new(vec![place_near(
        "park", "Nearby Park", stop, 1.0, 4.4, 90,
    )]));
    let finder = finder_with(directions_ok(), world.clone());

    let picks = finder
        .find_attractions(&[stop], STEP_KM, RADIUS_KM, 8, CORRIDOR_KM)
        .await
        .unwrap();

    // Sampled as [stop, stop]
    assert_eq!(world.calls.load(Ordering::SeqCst), 2);
    assert_eq!(picks.len(), 1);
    assert!((picks[0].distance_from_route_km - 1.0).abs() < 0.01);

    let json = serde_json::to_value(&picks[0]).unwrap();
    assert!(json["distanceFromRouteKm"].is_number(), "{}", json);
}
