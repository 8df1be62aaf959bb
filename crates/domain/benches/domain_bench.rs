use chrono::NaiveTime;
use criterion::{Criterion, criterion_group, criterion_main};
use hotplate_common::{MenuItemId, Money, OrderId, RestaurantId, UserId};
use hotplate_domain::{
    AddItem, Address, AggregateRoot, CreateOrder, DEFAULT_TAX_RATE, Delivery,
    InMemoryEventPublisher, InMemoryRepository, Order, OrderEvent, OrderService, PlaceOrder,
    Restaurant,
};

type BenchService = OrderService<InMemoryRepository<Order>, InMemoryEventPublisher<OrderEvent>>;

fn bench_service() -> BenchService {
    OrderService::new(InMemoryRepository::new(), InMemoryEventPublisher::new())
}

fn bench_address() -> Address {
    Address::new("42 Elm St", "Springfield", "12345", "USA", 40.0, -74.0, false).unwrap()
}

fn bench_create_order(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let address = bench_address();

    c.bench_function("domain/create_order", |b| {
        b.iter(|| {
            rt.block_on(async {
                let service = bench_service();
                let cmd = CreateOrder::new(
                    UserId::new(),
                    RestaurantId::new(),
                    address.clone(),
                    None,
                );
                service.create_order(cmd).await.unwrap();
            });
        });
    });
}

fn bench_build_and_place_order(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let address = bench_address();

    c.bench_function("domain/build_and_place_order", |b| {
        b.iter(|| {
            rt.block_on(async {
                let service = bench_service();
                let created = service
                    .create_order(CreateOrder::new(
                        UserId::new(),
                        RestaurantId::new(),
                        address.clone(),
                        None,
                    ))
                    .await
                    .unwrap();
                let order_id = created.aggregate.id();

                for i in 1..=3i64 {
                    service
                        .add_item(AddItem::new(
                            order_id,
                            MenuItemId::new(),
                            format!("Dish {i}"),
                            Money::from_cents(500 * i),
                            2,
                            None,
                        ))
                        .await
                        .unwrap();
                }

                service
                    .place_order(PlaceOrder::new(
                        order_id,
                        Money::from_cents(299),
                        DEFAULT_TAX_RATE,
                    ))
                    .await
                    .unwrap();
            });
        });
    });
}

fn bench_menu_construction(c: &mut Criterion) {
    let opens = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
    let closes = NaiveTime::from_hms_opt(22, 0, 0).unwrap();

    c.bench_function("domain/menu_construction_50_items", |b| {
        b.iter(|| {
            let mut restaurant = Restaurant::register(
                "Bench Bistro",
                "Benchmark menu",
                "555-0100",
                "bench@example.com",
                bench_address(),
                UserId::new(),
                opens,
                closes,
                Money::from_cents(299),
                Money::from_cents(1000),
                40,
            )
            .unwrap();

            for category in 1..=5i64 {
                let category_id = restaurant
                    .add_menu_category(&format!("Category {category}"), "Benchmark", 1)
                    .unwrap();
                for item in 1..=10i64 {
                    restaurant
                        .add_menu_item(
                            category_id,
                            &format!("Dish {category}-{item}"),
                            "Benchmark dish",
                            Money::from_cents(100 * item),
                            true,
                        )
                        .unwrap();
                }
            }
        });
    });
}

fn bench_location_trail(c: &mut Criterion) {
    let pickup = bench_address();
    let dropoff = bench_address();

    c.bench_function("domain/location_trail_50_updates", |b| {
        b.iter(|| {
            let mut delivery = Delivery::assign(
                OrderId::new(),
                UserId::new(),
                pickup.clone(),
                dropoff.clone(),
                Money::from_cents(299),
                30,
            )
            .unwrap();
            delivery.start().unwrap();

            for i in 0..50 {
                let step = f64::from(i) * 0.0001;
                delivery
                    .update_location(40.0 + step, -74.0 - step, None)
                    .unwrap();
            }
            delivery.current_location().unwrap();
        });
    });
}

fn bench_order_serde_round_trip(c: &mut Criterion) {
    let mut order = Order::create(UserId::new(), RestaurantId::new(), bench_address(), None);
    for i in 1..=20i64 {
        order
            .add_item(
                MenuItemId::new(),
                &format!("Dish {i}"),
                Money::from_cents(100 * i),
                1,
                None,
            )
            .unwrap();
    }

    c.bench_function("domain/order_serde_round_trip_20_items", |b| {
        b.iter(|| {
            let json = serde_json::to_string(&order).unwrap();
            let restored: Order = serde_json::from_str(&json).unwrap();
            restored.item_count()
        });
    });
}

criterion_group!(
    benches,
    bench_create_order,
    bench_build_and_place_order,
    bench_menu_construction,
    bench_location_trail,
    bench_order_serde_round_trip,
);
criterion_main!(benches);
