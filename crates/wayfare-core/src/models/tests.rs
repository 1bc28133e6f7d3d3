#[cfg(test)]
mod model_tests {
    use serde_json::json;

    use crate::{
        models::{
            DayCount, HomeContent, Itinerary, ListFilter, Package, PackageType, ResourceKind,
            RomanticPackage,
        },
        params::ListResources,
    };

    fn create_test_package(destination: &str, package_type: PackageType, rating: u8) -> Package {
        Package {
            id: Some("1".to_string()),
            title: "Test Package".to_string(),
            destination: destination.to_string(),
            location: String::new(),
            price: "₹10,000/-".to_string(),
            numeric_price: 10000.0,
            days: "3 Days".to_string(),
            numeric_days: DayCount::Count(3),
            image: String::new(),
            hotel_rating: rating,
            package_type,
            features: vec![],
            highlights: vec![],
            category: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_package_serializes_camel_case() {
        let package = create_test_package("bali", PackageType::CandleNight, 4);
        let value = serde_json::to_value(&package).unwrap();

        assert_eq!(value["type"], "Candle Night");
        assert_eq!(value["hotelRating"], 4);
        assert_eq!(value["numericPrice"], 10000.0);
        assert_eq!(value["numericDays"], 3);
        assert!(value.get("createdAt").is_none());
        assert!(value.get("package_type").is_none());
    }

    #[test]
    fn test_day_count_untagged() {
        let raw: DayCount = serde_json::from_value(json!("a week")).unwrap();
        assert_eq!(raw, DayCount::Raw("a week".to_string()));
        assert_eq!(raw.as_count(), None);

        let count: DayCount = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(count.as_count(), Some(7));
    }

    #[test]
    fn test_package_type_lenient_parse() {
        assert_eq!("candle-night".parse::<PackageType>().unwrap(), PackageType::CandleNight);
        assert_eq!("BEACH ROMANCE".parse::<PackageType>().unwrap(), PackageType::BeachRomance);
        assert_eq!(
            "Safari".parse::<PackageType>().unwrap(),
            PackageType::Other("Safari".to_string())
        );

        assert!(PackageType::Honeymoon.is_romantic());
        assert!(PackageType::Honeymoon.is_standard());
        assert!(!PackageType::Luxury.is_romantic());
        assert!(!PackageType::Other("Safari".into()).is_standard());
    }

    #[test]
    fn test_unknown_type_round_trips_verbatim() {
        let value = json!({
            "title": "Legacy",
            "destination": "dubai",
            "price": "₹1/-",
            "days": "1 Day",
            "type": "Desert Camp"
        });
        let package: Package = serde_json::from_value(value).unwrap();
        assert_eq!(package.package_type, PackageType::Other("Desert Camp".into()));
        assert_eq!(serde_json::to_value(&package).unwrap()["type"], "Desert Camp");
    }

    #[test]
    fn test_romantic_package_is_transparent() {
        let package = create_test_package("maldives", PackageType::Proposal, 5);
        let romantic = RomanticPackage(package.clone());

        assert_eq!(
            serde_json::to_value(&romantic).unwrap(),
            serde_json::to_value(&package).unwrap()
        );
        assert_eq!(romantic.title, "Test Package");
    }

    #[test]
    fn test_itinerary_defaults_missing_lists() {
        let itinerary: Itinerary = serde_json::from_value(json!({
            "id": "5",
            "title": "Dubai Nights",
            "destination": "dubai",
            "duration": "3 Days",
            "packageId": "2"
        }))
        .unwrap();

        assert!(itinerary.days.is_empty());
        assert!(itinerary.hotel_images.is_empty());
        assert_eq!(itinerary.package_id.as_deref(), Some("2"));
    }

    #[test]
    fn test_home_content_sections() {
        let home: HomeContent = serde_json::from_value(json!({
            "id": "home",
            "destinations": {
                "bali": {
                    "featuredPackageIds": ["1", "2"],
                    "topDestinations": [{"name": "Ubud", "image": "/images/ubud.jpg"}]
                }
            }
        }))
        .unwrap();

        let bali = &home.destinations["bali"];
        assert_eq!(bali.featured_package_ids, vec!["1", "2"]);
        assert_eq!(bali.top_destinations[0].link, "");
        assert!(!bali.is_empty());
    }

    #[test]
    fn test_resource_kind_parse_and_routes() {
        assert_eq!(
            "romantic_packages".parse::<ResourceKind>().unwrap(),
            ResourceKind::RomanticPackages
        );
        assert!("tours".parse::<ResourceKind>().is_err());

        assert_eq!(
            ResourceKind::Packages.list_route(Some("bali")),
            "/admin/packages?destination=bali"
        );
        assert_eq!(ResourceKind::Itineraries.list_route(Some("")), "/admin/itineraries");
        assert!(ResourceKind::HomeContent.is_singleton());
    }

    #[test]
    fn test_filter_matching() {
        let packages = vec![
            create_test_package("bali", PackageType::Luxury, 5),
            create_test_package("bali", PackageType::Honeymoon, 4),
            create_test_package("dubai", PackageType::Honeymoon, 4),
        ];

        let bali = ListFilter::for_destination("bali");
        assert_eq!(bali.apply(&packages).len(), 2);

        let romantic = ListFilter::default().romantic();
        assert_eq!(romantic.apply(&packages).len(), 2);

        let four_star = ListFilter {
            hotel_rating: Some(4),
            ..ListFilter::for_destination("bali")
        };
        let matched = four_star.apply(&packages);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].package_type, PackageType::Honeymoon);

        // rating is exact, not a minimum
        let three_star = ListFilter {
            hotel_rating: Some(3),
            ..Default::default()
        };
        assert!(three_star.apply(&packages).is_empty());
    }

    #[test]
    fn test_filter_from_params() {
        let params = ListResources {
            destination: Some(String::new()),
            package_type: Some("luxury".to_string()),
            hotel_rating: Some(5),
        };
        let filter = ListFilter::from(&params);

        assert_eq!(filter.destination, None);
        assert_eq!(filter.package_type, Some(PackageType::Luxury));
        assert_eq!(filter.hotel_rating, Some(5));
    }

    #[test]
    fn test_filter_destination_ignores_case() {
        let packages = vec![
            create_test_package("bali", PackageType::Luxury, 5),
            create_test_package("dubai", PackageType::Luxury, 5),
        ];

        let params = ListResources {
            destination: Some(" Bali ".to_string()),
            ..Default::default()
        };
        let filter = ListFilter::from(&params);
        assert_eq!(filter.destination.as_deref(), Some("bali"));
        assert_eq!(filter.apply(&packages).len(), 1);

        assert_eq!(ListFilter::for_destination("BALI").apply(&packages).len(), 1);
    }
}
