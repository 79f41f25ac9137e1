//! Many tasks ringing up items on one shared register.

use register_core::DiscountPercent;
use register_state::RegisterState;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_keep_ledger_consistent() {
    let state = RegisterState::new(DiscountPercent::none());

    let mut handles = Vec::new();
    for lane in 0..8 {
        let state = state.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..50 {
                state.add_item(format!("lane-{lane}"), 1.0, 2);
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let snapshot = state.snapshot();
    assert_eq!(snapshot.items.len(), 8 * 50 * 2);
    assert_eq!(snapshot.total, 800.0);
    for lane in 0..8 {
        let title = format!("lane-{lane}");
        assert_eq!(snapshot.items.iter().filter(|t| **t == title).count(), 100);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_add_and_void_under_one_lock() {
    let state = RegisterState::new(DiscountPercent::new(10).unwrap());

    let mut handles = Vec::new();
    for _ in 0..20 {
        let state = state.clone();
        handles.push(tokio::spawn(async move {
            state.with_register_mut(|register| {
                register.add_item("Keep", 1.0, 1);
                register.add_item("Oops", 5.0, 1);
                register.void_last_transaction();
            });
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let snapshot = state.snapshot();
    assert_eq!(snapshot.total, 20.0);
    assert!(snapshot.items.iter().all(|t| t == "Keep"));

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["discountPercent"], 10);
    assert_eq!(json["items"].as_array().unwrap().len(), 20);
}
