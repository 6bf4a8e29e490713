use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::render::{RenderCtx, RenderTarget};

/// CPU-side geometry: one position and one colour per vertex, plus a
/// triangle-list index buffer.
#[derive(Debug, Copy, Clone)]
pub struct MeshData<'a> {
    pub positions: &'a [[f32; 4]],
    pub colours: &'a [[f32; 3]],
    pub indices: &'a [u32],
}

impl MeshData<'_> {
    /// Checks the attribute arrays agree and every index names a vertex.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(!self.positions.is_empty(), "mesh has no vertices");
        anyhow::ensure!(
            self.positions.len() == self.colours.len(),
            "mesh has {} positions but {} colours",
            self.positions.len(),
            self.colours.len()
        );
        anyhow::ensure!(
            self.indices.len() % 3 == 0,
            "index count {} is not a multiple of 3",
            self.indices.len()
        );
        if let Some(bad) = self
            .indices
            .iter()
            .find(|&&i| i as usize >= self.positions.len())
        {
            anyhow::bail!(
                "index {bad} out of range for {} vertices",
                self.positions.len()
            );
        }
        Ok(())
    }
}

/// GPU-resident mesh. Buffers are written once at upload and never touched again.
pub struct Mesh {
    positions: wgpu::Buffer,
    colours: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
}

impl Mesh {
    pub fn upload(device: &wgpu::Device, data: &MeshData<'_>) -> Result<Self> {
        data.validate()?;

        let positions = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("gyre mesh positions"),
            contents: bytemuck::cast_slice(data.positions),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let colours = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("gyre mesh colours"),
            contents: bytemuck::cast_slice(data.colours),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("gyre mesh indices"),
            contents: bytemuck::cast_slice(data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::debug!(
            "uploaded mesh: {} vertices, {} indices",
            data.positions.len(),
            data.indices.len()
        );

        Ok(Self {
            positions,
            colours,
            indices,
            index_count: data.indices.len() as u32,
        })
    }
}

/// Draws a [`Mesh`] with a single `u_matrix` model transform.
///
/// Pipeline and uniform buffer are created on first use and rebuilt if the
/// surface format changes.
#[derive(Default)]
pub struct MeshRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    matrix_ubo: Option<wgpu::Buffer>,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads `u_matrix` and issues one indexed triangle-list draw.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        mesh: &Mesh,
        u_matrix: &Mat4,
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);

        if mesh.index_count == 0 {
            return;
        }

        let Some(ubo) = self.matrix_ubo.as_ref() else {
            return;
        };
        let uniform = MatrixUniform {
            u_matrix: u_matrix.to_cols_array_2d(),
        };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&uniform));

        let Some(pipeline) = self.pipeline.as_ref() else {
            return;
        };
        let Some(bind_group) = self.bind_group.as_ref() else {
            return;
        };

        let mut rpass = target.begin_pass("gyre mesh pass");

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, mesh.positions.slice(..));
        rpass.set_vertex_buffer(1, mesh.colours.slice(..));
        rpass.set_index_buffer(mesh.indices.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("gyre mesh shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/mesh.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("gyre mesh bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: wgpu::BufferSize::new(MatrixUniform::SIZE),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("gyre mesh pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("gyre mesh pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[position_layout(), colour_layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            // Mirrored poses flip winding, so nothing is culled.
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("mesh pipeline built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.matrix_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.matrix_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else {
            return;
        };

        let matrix_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("gyre u_matrix ubo"),
            size: MatrixUniform::SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("gyre mesh bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: matrix_ubo.as_entire_binding(),
            }],
        });

        self.matrix_ubo = Some(matrix_ubo);
        self.bind_group = Some(bind_group);
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct MatrixUniform {
    u_matrix: [[f32; 4]; 4],
}

impl MatrixUniform {
    const SIZE: u64 = std::mem::size_of::<MatrixUniform>() as u64;
}

// a_position
const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x4];
// a_colour
const COLOUR_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];

fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 4]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_ATTRS,
    }
}

fn colour_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 3]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &COLOUR_ATTRS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSITIONS: [[f32; 4]; 3] = [
        [0.0, 0.0, 0.0, 1.0],
        [1.0, 0.0, 0.0, 1.0],
        [0.0, 1.0, 0.0, 1.0],
    ];
    const COLOURS: [[f32; 3]; 3] = [[1.0, 0.0, 0.0]; 3];

    #[test]
    fn valid_triangle_passes() {
        let data = MeshData { positions: &POSITIONS, colours: &COLOURS, indices: &[0, 1, 2] };
        assert!(data.validate().is_ok());
    }

    #[test]
    fn mismatched_colours_rejected() {
        let data = MeshData {
            positions: &POSITIONS,
            colours: &COLOURS[..2],
            indices: &[0, 1, 2],
        };
        assert!(data.validate().is_err());
    }

    #[test]
    fn out_of_range_index_rejected() {
        let data = MeshData { positions: &POSITIONS, colours: &COLOURS, indices: &[0, 1, 3] };
        let err = data.validate().unwrap_err();
        assert!(err.to_string().contains("index 3"), "{err}");
    }

    #[test]
    fn partial_triangle_rejected() {
        let data = MeshData { positions: &POSITIONS, colours: &COLOURS, indices: &[0, 1] };
        assert!(data.validate().is_err());
    }

    #[test]
    fn uniform_is_one_mat4() {
        assert_eq!(MatrixUniform::SIZE, 64);
    }
}
