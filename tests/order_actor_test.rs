use actor_framework::mock::MockClient;
use actor_framework::{ActorClient, FrameworkError, Versioned, VersionedUpdate};
use order_service::clients::{OrderClient, ProductClient};
use order_service::model::{
    Customer, CustomerId, NewOrder, OrderLineItem, Product, ProductId,
};
use order_service::store::{OrderStore, StoreError, UnitOfWork};

fn customer() -> Customer {
    Customer {
        id: CustomerId::from("C1"),
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
    }
}

fn product(id: &str) -> Versioned<Product> {
    Versioned::new(Product {
        id: ProductId::from(id),
        name: format!("Product {id}"),
        price: 10.0,
        quantity: 5,
    })
}

fn line(id: &str, quantity: u32) -> OrderLineItem {
    OrderLineItem {
        product_id: ProductId::from(id),
        quantity,
        unit_price: 10.0,
    }
}

/// Real Order actor with a mocked product store behind its reference check.
#[tokio::test]
async fn test_order_actor_checks_product_references() {
    let mut product_mock = MockClient::<Product>::new();
    product_mock
        .expect_get_many()
        .return_ok(vec![product("P1"), product("P2")]);
    let product_client = ProductClient::new(product_mock.client());

    let (order_actor, generic_client) = order_service::order_actor::new(10);
    let order_client = OrderClient::new(generic_client);
    let actor_handle = tokio::spawn(order_actor.run(product_client));

    let mut uow = UnitOfWork::begin();
    let order = order_client
        .create(
            &mut uow,
            NewOrder {
                customer: customer(),
                line_items: vec![line("P1", 2), line("P2", 1), line("P1", 1)],
            },
        )
        .await
        .expect("Order creation failed");
    uow.commit();

    assert_eq!(order.line_items.len(), 3);
    let stored = order_client.get(order.id.clone()).await.unwrap().unwrap();
    assert_eq!(stored, order);

    product_mock.verify();
    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_order_with_unknown_product_is_rejected() {
    let mut product_mock = MockClient::<Product>::new();
    product_mock.expect_get_many().return_ok(vec![product("P1")]);

    let (order_actor, generic_client) = order_service::order_actor::new(10);
    let order_client = OrderClient::new(generic_client);
    tokio::spawn(order_actor.run(ProductClient::new(product_mock.client())));

    let mut uow = UnitOfWork::begin();
    let err = order_client
        .create(
            &mut uow,
            NewOrder {
                customer: customer(),
                line_items: vec![line("P1", 1), line("P9", 1), line("P9", 2)],
            },
        )
        .await
        .unwrap_err();

    match err {
        StoreError::Rejected(msg) => assert!(msg.ends_with("unknown products: P9"), "{msg}"),
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(uow.pending(), 0);
    uow.commit();
    product_mock.verify();
}

#[tokio::test]
async fn test_order_is_rejected_when_products_cannot_be_checked() {
    let mut product_mock = MockClient::<Product>::new();
    product_mock
        .expect_get_many()
        .return_err(FrameworkError::ActorClosed);

    let (order_actor, generic_client) = order_service::order_actor::new(10);
    let order_client = OrderClient::new(generic_client);
    tokio::spawn(order_actor.run(ProductClient::new(product_mock.client())));

    let mut uow = UnitOfWork::begin();
    let err = order_client
        .create(
            &mut uow,
            NewOrder {
                customer: customer(),
                line_items: vec![line("P1", 1)],
            },
        )
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Product lookup failed"));
    uow.commit();
}

#[tokio::test]
async fn test_empty_order_is_rejected_without_lookup() {
    let product_mock = MockClient::<Product>::new();

    let (order_actor, generic_client) = order_service::order_actor::new(10);
    let order_client = OrderClient::new(generic_client);
    tokio::spawn(order_actor.run(ProductClient::new(product_mock.client())));

    let mut uow = UnitOfWork::begin();
    let err = order_client
        .create(
            &mut uow,
            NewOrder {
                customer: customer(),
                line_items: vec![],
            },
        )
        .await
        .unwrap_err();
    assert!(err.to_string().contains("has no line items"));
    uow.commit();
    product_mock.verify();
}

#[tokio::test]
async fn test_rollback_deletes_order_and_orders_are_immutable() {
    let mut product_mock = MockClient::<Product>::new();
    product_mock.expect_get_many().return_ok(vec![product("P1")]);

    let (order_actor, generic_client) = order_service::order_actor::new(10);
    let order_client = OrderClient::new(generic_client);
    tokio::spawn(order_actor.run(ProductClient::new(product_mock.client())));

    let mut uow = UnitOfWork::begin();
    let order = order_client
        .create(
            &mut uow,
            NewOrder {
                customer: customer(),
                line_items: vec![line("P1", 1)],
            },
        )
        .await
        .unwrap();

    let err = order_client
        .inner()
        .update_many(vec![VersionedUpdate::new(order.id.clone(), (), None)])
        .await
        .unwrap_err();
    assert!(err.to_string().contains("cannot be modified"));

    uow.rollback().await.unwrap();
    assert!(order_client.get(order.id).await.unwrap().is_none());
}
