use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by binaries.
pub trait App {
    /// Called for every window event before the runtime handles it.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called once per redraw: advance state by `ctx.time.dt`, then render.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Idle;

    impl App for Idle {
        fn on_frame(&mut self, _ctx: &mut FrameCtx<'_, '_>) -> AppControl {
            AppControl::Continue
        }
    }

    struct QuitOnClose;

    impl App for QuitOnClose {
        fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
            match event {
                WindowEvent::CloseRequested => AppControl::Exit,
                _ => AppControl::Continue,
            }
        }

        fn on_frame(&mut self, _ctx: &mut FrameCtx<'_, '_>) -> AppControl {
            AppControl::Continue
        }
    }

    #[test]
    fn default_window_hook_continues() {
        let mut app = Idle;
        let got = app.on_window_event(WindowId::dummy(), &WindowEvent::CloseRequested);
        assert_eq!(got, AppControl::Continue);
    }

    #[test]
    fn exit_is_returned_from_the_hook() {
        let mut app = QuitOnClose;
        let id = WindowId::dummy();
        assert_eq!(app.on_window_event(id, &WindowEvent::CloseRequested), AppControl::Exit);
        assert_eq!(app.on_window_event(id, &WindowEvent::Focused(true)), AppControl::Continue);
    }
}
