use anyhow::Result;

use gyre_engine::animation::{AnimationConfig, Animator};
use gyre_engine::core::{App, AppControl, FrameCtx};
use gyre_engine::paint::Color;
use gyre_engine::render::{Mesh, MeshData, MeshRenderer};
use winit::event::WindowEvent;
use winit::window::WindowId;

//          (0,1)
//           /|\
//          / | \
//         /  |  \
//        / (0,0) \
//       /   / \   \
//      /  /     \  \
//     / /         \ \
//    //             \\
// (-1,-1)          (1,-1)
pub const VERTICES: [[f32; 4]; 4] = [
    [0.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [-1.0, -1.0, 0.0, 1.0],
    [1.0, -1.0, 0.0, 1.0],
];

pub const COLOURS: [Color; 4] = [Color::MAGENTA, Color::MAGENTA, Color::RED, Color::BLUE];

pub const INDICES: [u32; 6] = [
    0, 1, 2, // left triangle
    0, 1, 3, // right triangle
];

/// The animated arrow head.
pub struct Scene {
    animator: Animator,
    clear: Color,

    renderer: MeshRenderer,
    mesh: Option<Mesh>,
}

impl Scene {
    pub fn new(config: &AnimationConfig, clear: Color) -> Self {
        let animator = Animator::from_config(config);
        log::info!(
            "preset {}: {:.3} rad/s, linear speed {:.3}",
            config.preset,
            animator.angular_speed(),
            animator.linear_speed(),
        );

        Self {
            animator,
            clear,
            renderer: MeshRenderer::new(),
            mesh: None,
        }
    }

    pub fn update(&mut self, delta: f32) {
        self.animator.update(delta);
    }

    fn ensure_mesh(&mut self, device: &wgpu::Device) -> Result<()> {
        if self.mesh.is_some() {
            return Ok(());
        }

        let colours = COLOURS.map(Color::to_rgb_array);
        let data = MeshData {
            positions: &VERTICES,
            colours: &colours,
            indices: &INDICES,
        };
        self.mesh = Some(Mesh::upload(device, &data)?);
        Ok(())
    }
}

impl App for Scene {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        if matches!(event, WindowEvent::CloseRequested) {
            log::info!("closing after {} frames", self.animator.frames());
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if let Err(e) = self.ensure_mesh(ctx.gpu.device()) {
            log::error!("failed to upload scene mesh: {e:#}");
            return AppControl::Exit;
        }

        self.update(ctx.time.dt);

        let Some(mesh) = self.mesh.as_ref() else {
            return AppControl::Continue;
        };
        let renderer = &mut self.renderer;
        let model = *self.animator.model();

        ctx.render(self.clear, |rctx, target| {
            renderer.render(rctx, target, mesh, &model);
        })
    }
}
