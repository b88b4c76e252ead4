use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::device::{Gpu, GpuFrame};
use crate::error::SetupError;
use crate::scene::FLOATS_PER_VERTEX;

use super::{FrameSink, LineStripDraw, ProgramLibrary, RenderCtx, RenderTarget, ShaderStage};

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ColorUniform {
    color: [f32; 4],
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: (FLOATS_PER_VERTEX * std::mem::size_of::<f32>()) as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}

/// Compiled line-strip pipeline plus its fragment color uniform.
///
/// Built once for a fixed surface format. The output is opaque: no blending.
pub struct LineStripPipeline {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    color_ubo: wgpu::Buffer,
}

impl LineStripPipeline {
    pub fn new(
        ctx: &RenderCtx<'_>,
        library: &ProgramLibrary,
        vertex_entry: &str,
        fragment_entry: &str,
    ) -> Result<Self, SetupError> {
        let vertex_entry = library.lookup(ShaderStage::Vertex, vertex_entry)?;
        let fragment_entry = library.lookup(ShaderStage::Fragment, fragment_entry)?;

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(library.label()),
            source: wgpu::ShaderSource::Wgsl(library.source().into()),
        });

        let info = pollster::block_on(shader.get_compilation_info());
        let errors: Vec<String> = info
            .messages
            .iter()
            .filter(|m| matches!(m.message_type, wgpu::CompilationMessageType::Error))
            .map(|m| m.message.clone())
            .collect();
        if !errors.is_empty() {
            return Err(SetupError::PipelineCompilation(errors.join("; ")));
        }

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("strip color bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: wgpu::BufferSize::new(
                                std::mem::size_of::<ColorUniform>() as u64,
                            ),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("strip pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("strip line pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(vertex_entry),
                compilation_options: Default::default(),
                buffers: &[vertex_layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(fragment_entry),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineStrip,
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

        let color_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("strip color ubo"),
            size: std::mem::size_of::<ColorUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("strip color bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: color_ubo.as_entire_binding(),
            }],
        });

        log::info!(
            "pipeline ready: {vertex_entry}/{fragment_entry} -> {:?}",
            ctx.surface_format
        );

        Ok(Self {
            pipeline,
            bind_group,
            color_ubo,
        })
    }

    /// Records one cleared pass with a single line-strip draw.
    ///
    /// The vertex buffer is created fresh from `draw.vertices`; the previous
    /// frame's buffer is released once the GPU is done with it.
    pub fn encode(&self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, draw: &LineStripDraw<'_>) {
        let vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("strip vbo"),
            contents: bytemuck::cast_slice(draw.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let uniform = ColorUniform { color: draw.color.to_array() };
        ctx.queue.write_buffer(&self.color_ubo, 0, bytemuck::bytes_of(&uniform));

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("strip pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(draw.clear.to_wgpu()),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..draw.vertex_count(), 0..1);
    }
}

/// [`FrameSink`] backed by the window surface.
///
/// Surface errors on acquire are resolved through
/// [`Gpu::handle_surface_error`]; a fatal one is latched in `fatal` so the
/// caller can shut down after the tick. The compositor is notified only
/// when a frame is actually about to be presented.
pub struct GpuSink<'a, 'w> {
    pub gpu: &'a mut Gpu<'w>,
    pub window: &'a Window,
    pub pipeline: &'a LineStripPipeline,
    pub fatal: bool,
}

impl<'a, 'w> GpuSink<'a, 'w> {
    pub fn new(gpu: &'a mut Gpu<'w>, window: &'a Window, pipeline: &'a LineStripPipeline) -> Self {
        Self {
            gpu,
            window,
            pipeline,
            fatal: false,
        }
    }
}

impl FrameSink for GpuSink<'_, '_> {
    type Frame = GpuFrame;

    fn acquire(&mut self) -> Option<GpuFrame> {
        match self.gpu.begin_frame() {
            Ok(frame) => Some(frame),
            Err(err) => {
                let action = self.gpu.handle_surface_error(err);
                log::debug!("surface acquire failed: {action:?}");
                self.fatal |= action.is_fatal();
                None
            }
        }
    }

    fn encode(&mut self, frame: &mut GpuFrame, draw: &LineStripDraw<'_>) {
        let ctx = RenderCtx::new(self.gpu.device(), self.gpu.queue(), self.gpu.surface_format());
        let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
        self.pipeline.encode(&ctx, &mut target, draw);
    }

    fn present(&mut self, frame: GpuFrame) {
        self.window.pre_present_notify();
        self.gpu.submit(frame);
    }
}
