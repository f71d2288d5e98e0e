//! Window lifecycle
//!
//! Events are delivered one after another by a single loop. Each event kind
//! maps to one handler in [`WindowHandlers`]; the handlers own the watch face
//! between load and unload.

use core::marker::PhantomData;

use embedded_graphics::prelude::DrawTarget;

use super::{ColorMode, WatchFace};
use crate::system::Host;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Window pushed on screen, create resources
    Load,
    /// A wall-clock minute has passed
    Tick,
    /// Window removed, release resources
    Unload,
}

/// Handler table for the window events
pub struct WindowHandlers<A, H> {
    pub load: fn(&H) -> A,
    pub tick: fn(&mut A, &H),
    pub unload: fn(A),
}

impl<A, H> WindowHandlers<A, H>
where
    A: WatchFace,
    H: Host,
{
    /// Handlers driving a [`WatchFace`]: show placeholders, then the time right away.
    pub fn watch_face() -> Self {
        Self {
            load: |host| {
                let mut face = A::new();
                face.update(host);
                face
            },
            tick: |face, host| face.update(host),
            unload: drop,
        }
    }
}

pub struct Window<A, H> {
    handlers: WindowHandlers<A, H>,
    /// Application context, present between load and unload
    context: Option<A>,
    _host: PhantomData<fn(&H)>,
}

impl<A, H> Window<A, H> {
    pub fn new(handlers: WindowHandlers<A, H>) -> Self {
        Self {
            handlers,
            context: None,
            _host: PhantomData,
        }
    }

    /// Run the handler for `event`
    pub fn dispatch(&mut self, event: Event, host: &H) {
        match event {
            Event::Load => {
                if self.context.is_some() {
                    debug!("Window already loaded");
                    return;
                }
                self.context = Some((self.handlers.load)(host));
                info!("Window loaded");
            }
            Event::Tick => match self.context.as_mut() {
                Some(context) => (self.handlers.tick)(context, host),
                // Not subscribed before load or after unload
                None => debug!("Tick without loaded window"),
            },
            Event::Unload => {
                if let Some(context) = self.context.take() {
                    (self.handlers.unload)(context);
                    info!("Window unloaded");
                }
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.context.is_some()
    }

    pub fn context(&self) -> Option<&A> {
        self.context.as_ref()
    }
}

impl<A, H> Window<A, H>
where
    A: WatchFace,
    H: Host,
{
    /// Redraw the window contents, nothing is drawn while unloaded
    pub fn render<D>(&mut self, host: &H, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>,
    {
        match self.context.as_mut() {
            Some(face) => face.draw(host, target),
            None => Ok(()),
        }
    }
}
