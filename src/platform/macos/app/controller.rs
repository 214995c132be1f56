//! Owner of the overlay's runtime state.
//!
//! One `OverlayController` exists per process. It holds the `OverlayContext`
//! plus strong references to every AppKit object that has to stay alive
//! (window, view, monitors, observers, status item, pending timer). AppKit
//! callbacks reach it through a `Weak`, so nothing fires into a dropped
//! controller.
//!
//! Borrows of the context never span a message send: AppKit may call back
//! into `drawRect:` synchronously.

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use tracing::{debug, warn};

use crate::model::{OverlayConfig, OverlayContext, OverlayPoint, ReopenTicket, ScreenPoint};
use crate::platform::macos::ffi::bridge::{
    as_id, id, lookup_class, msg_send, nil, retain_object, AnyObject, RcBlock, Retained, NO, YES,
};
use crate::platform::macos::ui::overlay::{apply_overlay_style, load_symbol_icon};

pub struct OverlayController {
    ctx: RefCell<OverlayContext>,
    window: Retained<AnyObject>,
    view: Retained<AnyObject>,
    icon: RefCell<Option<Option<Retained<AnyObject>>>>,
    reopen_timer: RefCell<Option<Retained<AnyObject>>>,
    monitors: RefCell<Vec<Retained<AnyObject>>>,
    observers: RefCell<Vec<Retained<AnyObject>>>,
    status_item: RefCell<Option<Retained<AnyObject>>>,
}

impl OverlayController {
    pub fn new(
        ctx: OverlayContext,
        window: Retained<AnyObject>,
        view: Retained<AnyObject>,
    ) -> Rc<Self> {
        Rc::new(Self {
            ctx: RefCell::new(ctx),
            window,
            view,
            icon: RefCell::new(None),
            reopen_timer: RefCell::new(None),
            monitors: RefCell::new(Vec::new()),
            observers: RefCell::new(Vec::new()),
            status_item: RefCell::new(None),
        })
    }

    pub fn window(&self) -> id {
        as_id(&self.window)
    }

    pub fn view(&self) -> id {
        as_id(&self.view)
    }

    pub fn config(&self) -> Ref<'_, OverlayConfig> {
        Ref::map(self.ctx.borrow(), |c| c.config())
    }

    /// Where the icon is centred, in flipped view coordinates.
    pub fn cursor(&self) -> OverlayPoint {
        self.ctx.borrow().cursor()
    }

    /// Icon image, loaded on first use. `None` when the symbol is unavailable.
    pub fn icon(&self) -> Option<id> {
        if self.icon.borrow().is_none() {
            let symbol = self.config().icon_symbol;
            let loaded = unsafe { load_symbol_icon(symbol) };
            if loaded.is_none() {
                warn!(symbol, "icon symbol unavailable, drawing fallback ring");
            }
            *self.icon.borrow_mut() = Some(loaded);
        }
        self.icon.borrow().as_ref().and_then(|i| i.as_ref().map(as_id))
    }

    /// Entry point for both mouse monitors.
    pub fn pointer_moved(&self, raw: ScreenPoint) {
        self.ctx.borrow_mut().pointer_moved(raw);
        unsafe {
            let _: () = msg_send![self.view(), setNeedsDisplay: YES];
        }
    }

    /// Bring the overlay on screen and run the appearance logic.
    pub fn show(self: &Rc<Self>) {
        unsafe {
            let window = self.window();
            let _: () = msg_send![window, makeKeyAndOrderFront: nil];
            let _: () = msg_send![window, orderFrontRegardless];
        }
        self.appeared();
    }

    fn appeared(self: &Rc<Self>) {
        let action = self.ctx.borrow_mut().appeared();
        unsafe {
            let chrome = apply_overlay_style(self.window());
            debug!(ready = chrome.is_overlay_ready(), ?chrome, "overlay style applied");
        }
        if let Some(ticket) = action.reopen_ticket() {
            self.dismiss_and_schedule_reopen(ticket);
        }
    }

    /// Order the window out and bring it back after the configured delay.
    fn dismiss_and_schedule_reopen(self: &Rc<Self>, ticket: ReopenTicket) {
        let delay = self.config().reopen_delay_secs();
        let timer_cls = match lookup_class(c"NSTimer") {
            Ok(cls) => cls,
            Err(err) => {
                warn!(%err, "NSTimer unavailable");
                self.ctx.borrow_mut().reopen_skipped(ticket);
                return;
            }
        };

        let weak: Weak<Self> = Rc::downgrade(self);
        let fire = RcBlock::new(move |_timer: id| {
            if let Some(controller) = weak.upgrade() {
                controller.reopen_fired(ticket);
            }
        });

        unsafe {
            let _: () = msg_send![self.window(), orderOut: nil];
            let timer: id = msg_send![
                timer_cls,
                scheduledTimerWithTimeInterval: delay,
                repeats: NO,
                block: &*fire
            ];
            *self.reopen_timer.borrow_mut() = retain_object(timer);
        }
        debug!(generation = ticket.generation(), delay, "window dismissed, reopen scheduled");
    }

    fn reopen_fired(self: &Rc<Self>, ticket: ReopenTicket) {
        self.reopen_timer.borrow_mut().take();
        if self.ctx.borrow_mut().reopen_due(ticket) {
            self.show();
        }
    }

    /// Cancel a pending reopen: invalidate the timer and the ticket.
    pub fn teardown(&self) {
        let timer = self.reopen_timer.borrow_mut().take();
        if let Some(timer) = timer {
            unsafe {
                let _: () = msg_send![as_id(&timer), invalidate];
            }
        }
        self.ctx.borrow_mut().teardown();
    }

    /// App is terminating: drop monitors and observers, cancel pending work.
    pub fn shutdown(&self) {
        self.teardown();
        if let Ok(event_cls) = lookup_class(c"NSEvent") {
            for monitor in self.monitors.borrow_mut().drain(..) {
                unsafe {
                    let _: () = msg_send![event_cls, removeMonitor: as_id(&monitor)];
                }
            }
        }
        if let Ok(center_cls) = lookup_class(c"NSNotificationCenter") {
            unsafe {
                let center: id = msg_send![center_cls, defaultCenter];
                for observer in self.observers.borrow_mut().drain(..) {
                    let _: () = msg_send![center, removeObserver: as_id(&observer)];
                }
            }
        }
        debug!("overlay shut down");
    }

    pub fn keep_monitor(&self, monitor: Retained<AnyObject>) {
        self.monitors.borrow_mut().push(monitor);
    }

    pub fn keep_observer(&self, observer: Retained<AnyObject>) {
        self.observers.borrow_mut().push(observer);
    }

    pub fn set_status_item(&self, item: Retained<AnyObject>) {
        *self.status_item.borrow_mut() = Some(item);
    }
}
