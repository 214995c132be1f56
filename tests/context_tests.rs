//! One-shot reopen sequencing through the overlay context.

use followcursor::model::{
    AppearAction, OverlayConfig, OverlayContext, ReopenGate, ReopenPhase, ScreenPoint,
};

fn context() -> OverlayContext {
    OverlayContext::new(OverlayConfig::default(), 800.0, ScreenPoint::new(5.0, 5.0))
}

#[test]
fn first_appearance_requests_reopen() {
    let mut ctx = context();
    assert!(!ctx.is_initialized());
    let action = ctx.appeared();
    assert!(action.reopen_ticket().is_some());
    assert!(ctx.reopen_pending());
}

#[test]
fn reopen_completes_exactly_once_over_many_appearances() {
    let mut ctx = context();
    let mut reopens = 0;
    for _ in 0..20 {
        if let AppearAction::StyleAndReopen(ticket) = ctx.appeared() {
            reopens += 1;
            assert!(ctx.reopen_due(ticket));
        }
    }
    assert_eq!(reopens, 1);
    assert_eq!(ctx.appearances(), 20);
    assert!(ctx.is_initialized());
}

#[test]
fn timer_firing_twice_shows_window_once() {
    let mut ctx = context();
    let ticket = ctx.appeared().reopen_ticket().expect("first appearance reopens");
    assert!(ctx.reopen_due(ticket));
    assert!(!ctx.reopen_due(ticket));
}

#[test]
fn teardown_during_wait_drops_the_reopen() {
    let mut ctx = context();
    let ticket = ctx.appeared().reopen_ticket().expect("first appearance reopens");
    assert!(ctx.teardown());
    assert!(!ctx.reopen_due(ticket));
    assert!(!ctx.is_initialized());
}

#[test]
fn reappearing_after_teardown_schedules_a_fresh_reopen() {
    let mut ctx = context();
    let stale = ctx.appeared().reopen_ticket().expect("first appearance reopens");
    ctx.teardown();

    let fresh = ctx.appeared().reopen_ticket().expect("sequence restarts");
    assert_ne!(stale, fresh);
    assert!(!ctx.reopen_due(stale));
    assert!(ctx.reopen_due(fresh));
    assert!(ctx.is_initialized());
}

#[test]
fn teardown_after_done_is_a_no_op() {
    let mut ctx = context();
    let ticket = ctx.appeared().reopen_ticket().expect("first appearance reopens");
    ctx.reopen_due(ticket);
    assert!(!ctx.teardown());
    assert!(ctx.is_initialized());
    assert_eq!(ctx.appeared(), AppearAction::Style);
}

#[test]
fn gate_phases_follow_the_sequence() {
    let mut gate = ReopenGate::new();
    assert_eq!(gate.phase(), ReopenPhase::Idle);
    let ticket = gate.begin().expect("idle gate issues a ticket");
    assert_eq!(gate.phase(), ReopenPhase::Pending(ticket));
    assert!(gate.complete(ticket));
    assert_eq!(gate.phase(), ReopenPhase::Done);
}

#[test]
fn ticket_generations_increase() {
    let mut gate = ReopenGate::new();
    let a = gate.begin().expect("first ticket");
    gate.cancel();
    let b = gate.begin().expect("second ticket");
    assert!(b.generation() > a.generation());
}

#[test]
fn skipped_reopen_leaves_gate_idle() {
    let mut ctx = context();
    let ticket = ctx.appeared().reopen_ticket().expect("first appearance reopens");
    assert!(ctx.reopen_skipped(ticket));
    assert!(!ctx.reopen_pending());
    assert!(!ctx.is_initialized());
    assert!(!ctx.reopen_due(ticket));
    assert!(ctx.appeared().reopen_ticket().is_some());
}
