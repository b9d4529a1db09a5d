//! Flat-colored rectangle pipeline
//!
//! Shapes arrive in field units and are mapped to clip space on upload, so
//! the field keeps its aspect ratio whatever the canvas size.

use super::vertex::{Vertex, colors};
use crate::sim::PlayField;

/// Enough for a frame with room to spare; grows on demand
const INITIAL_VERTEX_CAPACITY: usize = 256;

/// Map a field position (origin top-left, y down) to normalized device
/// coordinates, letterboxing the field into a `viewport` of the given
/// pixel size without distorting it.
pub fn field_to_ndc(field: &PlayField, viewport: (u32, u32), x: f32, y: f32) -> (f32, f32) {
    let (w, h) = (viewport.0.max(1) as f32, viewport.1.max(1) as f32);
    // Pixels per field unit
    let scale = (w / field.width).min(h / field.height);

    let px = (x - field.width / 2.0) * scale;
    let py = (y - field.height / 2.0) * scale;
    (px * 2.0 / w, -py * 2.0 / h)
}

/// Vertex capacity that fits `needed`, doubling from `current`
pub fn grown_capacity(current: usize, needed: usize) -> usize {
    let mut capacity = current.max(1);
    while capacity < needed {
        capacity *= 2;
    }
    capacity
}

fn clear_color() -> wgpu::Color {
    let [r, g, b, a] = colors::BACKGROUND.map(f64::from);
    wgpu::Color { r, g, b, a }
}

fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("rect_vertices"),
        size: (capacity * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_rect_pipeline(device: &wgpu::Device, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("rect_shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("rect_pipeline_layout"),
        bind_group_layouts: &[],
        immediate_size: 0,
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("rect_pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::desc()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        // Triangle list, no culling: quads are wound either way
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

/// GPU side of the game: surface, pipeline and a reusable vertex buffer
pub struct RenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    vertex_count: u32,
    /// Viewport size in pixels
    pub size: (u32, u32),
    /// Field being drawn, for coordinate mapping
    pub field: PlayField,
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
        field: PlayField,
    ) -> Result<Self, wgpu::RequestDeviceError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("classic-pong-device"),
                required_features: wgpu::Features::empty(),
                // A handful of quads; WebGL2 limits are plenty
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let caps = surface.get_capabilities(adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(wgpu::TextureFormat::is_srgb)
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let pipeline = create_rect_pipeline(&device, format);
        let vertex_buffer = create_vertex_buffer(&device, INITIAL_VERTEX_CAPACITY);
        log::info!("Render pipeline ready ({}x{}, {:?})", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            vertex_count: 0,
            size: (width, height),
            field,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = (width, height);
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Map field-space vertices to clip space and write them into the
    /// vertex buffer, reallocating only when the frame outgrows it
    fn upload(&mut self, vertices: &[Vertex]) {
        let mapped: Vec<Vertex> = vertices
            .iter()
            .map(|v| {
                let (x, y) = field_to_ndc(&self.field, self.size, v.position[0], v.position[1]);
                Vertex::new(x, y, v.color)
            })
            .collect();

        if mapped.len() > self.vertex_capacity {
            self.vertex_capacity = grown_capacity(self.vertex_capacity, mapped.len());
            self.vertex_buffer = create_vertex_buffer(&self.device, self.vertex_capacity);
            log::debug!("Vertex buffer grown to {} vertices", self.vertex_capacity);
        }

        self.queue
            .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&mapped));
        self.vertex_count = mapped.len() as u32;
    }

    /// Draw one frame of field-space vertices
    pub fn render(&mut self, vertices: &[Vertex]) -> Result<(), wgpu::SurfaceError> {
        self.upload(vertices);

        let frame = self.surface.get_current_texture()?;
        let view = frame.texture.create_view(&Default::default());
        let mut encoder = self.device.create_command_encoder(&Default::default());

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rect_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color()),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if self.vertex_count > 0 {
                pass.set_pipeline(&self.pipeline);
                pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                pass.draw(0..self.vertex_count, 0..1);
            }
        }

        self.queue.submit([encoder.finish()]);
        frame.present();
        Ok(())
    }
}
