use summit_core::{
    Action, ExhibitionDemand, ExhibitionStatus, FeeSchedule, Lifecycle, Money, Paginated,
    PaymentTiming, Resource, SpaceSize, StandType, Tracked,
};

fn demand_fixture(status: &str) -> ExhibitionDemand {
    serde_json::from_value(serde_json::json!({
        "id": 42,
        "company": "Sahara Analytics",
        "contact_email": "hello@sahara.dz",
        "stand_type": "fitted",
        "space_size": "12",
        "payment_timing": "standard",
        "status": status,
        "created_at": "2026-03-10T09:30:00Z",
    }))
    .expect("fixture should decode")
}

#[test]
fn test_quote_from_a_decoded_demand() {
    let demand = demand_fixture("pending");
    let schedule = FeeSchedule::default();

    let quote = schedule
        .quote(demand.stand_type, demand.space_size, demand.payment_timing)
        .expect("published combination should price");

    assert_eq!(quote.base_cost, Money::from_major(160_000));
    assert_eq!(quote.total, Money::from_major(190_400));
    assert_eq!(quote.total.to_string(), "190 400 DZD");
}

#[test]
fn test_backend_discount_overrides_timing() {
    let demand = ExhibitionDemand {
        discount_percent: Some(25),
        ..demand_fixture("pending")
    };
    let schedule = FeeSchedule::default();

    let quote = match demand.discount_percent {
        Some(percent) => schedule
            .quote_with_discount(demand.stand_type, demand.space_size, percent)
            .unwrap(),
        None => schedule
            .quote(demand.stand_type, demand.space_size, demand.payment_timing)
            .unwrap(),
    };

    assert_eq!(quote.discount, Money::from_major(40_000));
    assert_eq!(quote.taxable, Money::from_major(120_000));
    assert_eq!(quote.total, Money::from_major(142_800));
}

#[test]
fn test_review_gating_follows_status() {
    let pending = demand_fixture("pending");
    assert!(pending.status().allows(Action::Accept));
    assert!(!pending.status().is_terminal());

    let accepted = demand_fixture("accepted");
    assert!(accepted.status().is_terminal());
    assert!(!accepted.status().allows(Action::Refuse));
    assert!(!accepted.status().allows(Action::Edit));
}

#[test]
fn test_paginated_envelope_of_demands() {
    let body = serde_json::json!({
        "data": [
            {
                "id": 1,
                "company": "Acme",
                "contact_email": "a@acme.dz",
                "stand_type": "bare",
                "space_size": "9",
                "payment_timing": "standard",
                "status": "unpaid",
                "created_at": "2026-01-05T08:00:00Z",
            },
        ],
        "current_page": 1,
        "per_page": 20,
        "total": 1,
        "last_page": 1,
    });

    let page: Paginated<ExhibitionDemand> = serde_json::from_value(body).unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page.data[0].status, ExhibitionStatus::Unpaid);
    assert_eq!(ExhibitionDemand::PATH, "exhibition-demands");
}

#[test]
fn test_unlisted_premium_size_refuses_to_price() {
    let schedule = FeeSchedule::default();
    assert!(schedule
        .quote(StandType::Premium, SpaceSize::Sqm9, PaymentTiming::Early)
        .is_err());
}
