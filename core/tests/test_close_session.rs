//! Tests for the end-of-round close pass
//!
//! Closing a session penalizes (priority + 1) every client still in the wait
//! queue. It removes nobody, clears nothing, and does not freeze the session.

use locker_sale_core::{Client, Session};

#[test]
fn test_close_penalizes_waiting_clients() {
    let mut session = Session::new(5).unwrap();

    session
        .enqueue(&Client::with_priority("X".to_string(), 0).unwrap())
        .unwrap();
    session
        .enqueue(&Client::with_priority("Y".to_string(), 1).unwrap())
        .unwrap();

    session.close_session();

    assert_eq!(session.get_client("X").unwrap().priority(), 1);
    assert_eq!(session.get_client("Y").unwrap().priority(), 2);
}

#[test]
fn test_close_leaves_served_clients_alone() {
    let mut session = Session::new(5).unwrap();
    let alice = Client::new("ALICE".to_string()).unwrap();
    let bob = Client::new("BOB".to_string()).unwrap();

    // ALICE was served (and boosted to -1), BOB is still waiting
    session.place_order(&alice, 2).unwrap();
    session.enqueue(&bob).unwrap();

    session.close_session();

    assert_eq!(session.get_client("ALICE").unwrap().priority(), -1);
    assert_eq!(session.get_client("BOB").unwrap().priority(), 1);
}

#[test]
fn test_close_does_not_drain_queue_or_orders() {
    let mut session = Session::new(5).unwrap();
    let alice = Client::new("ALICE".to_string()).unwrap();
    let bob = Client::new("BOB".to_string()).unwrap();

    session.place_order(&alice, 1).unwrap();
    session.enqueue(&bob).unwrap();

    session.close_session();

    assert_eq!(session.queue_len(), 1);
    assert!(session.is_queued("BOB"));
    assert_eq!(session.num_orders(), 1);
    assert_eq!(session.remaining_units(), 4);
}

#[test]
fn test_session_stays_operable_after_close() {
    let mut session = Session::new(5).unwrap();
    let bob = Client::new("BOB".to_string()).unwrap();

    session.enqueue(&bob).unwrap();
    session.close_session();
    assert_eq!(session.close_count(), 1);

    // No enforced closed state: operations keep working
    assert_eq!(session.dequeue_next().unwrap().name(), "BOB");
    assert!(session.place_order(&bob, 1).unwrap());
}

#[test]
fn test_repeated_close_compounds_the_penalty() {
    let mut session = Session::new(5).unwrap();

    session
        .enqueue(&Client::new("X".to_string()).unwrap())
        .unwrap();

    session.close_session();
    session.close_session();

    assert_eq!(session.get_client("X").unwrap().priority(), 2);
    assert_eq!(session.close_count(), 2);
}

#[test]
fn test_queued_entry_keeps_its_enqueue_time_position() {
    let mut session = Session::new(5).unwrap();

    // X queues at priority 0, then a close penalizes X to 1. The queued
    // entry keeps the key captured at enqueue time, so when Y later queues
    // at 0 both entries carry key 0 and the FIFO tie-break keeps X ahead,
    // even though X's current priority (1) is now worse than Y's (0).
    session
        .enqueue(&Client::with_priority("X".to_string(), 0).unwrap())
        .unwrap();
    session.close_session();
    assert_eq!(session.get_client("X").unwrap().priority(), 1);

    session
        .enqueue(&Client::with_priority("Y".to_string(), 0).unwrap())
        .unwrap();
    assert_eq!(session.dequeue_next().unwrap().name(), "X");
    assert_eq!(session.dequeue_next().unwrap().name(), "Y");
}
