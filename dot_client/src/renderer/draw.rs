use super::resources::{clear_color, create_instance_buffer, InstanceData};
use super::Renderer;
use crate::error::ClientError;
use crate::frame::Frame;
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer, frame: &Frame) -> Result<(), ClientError> {
    let output = renderer.surface.get_current_texture()?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let instance_count = update_instances(renderer, frame);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(clear_color(frame.background, renderer.linear_colors)),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if instance_count > 0 {
            draw_circles(renderer, &mut pass, instance_count);
        }
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Upload the frame's circles, growing the instance buffer when needed
fn update_instances(renderer: &mut Renderer, frame: &Frame) -> u32 {
    let instances: Vec<InstanceData> = frame
        .circles
        .iter()
        .map(|c| InstanceData::from_circle(c, renderer.linear_colors))
        .collect();

    if instances.len() > renderer.buffers.instance_capacity {
        let capacity = instances.len().next_power_of_two();
        renderer.buffers.instances = create_instance_buffer(&renderer.device, capacity);
        renderer.buffers.instance_capacity = capacity;
    }

    if !instances.is_empty() {
        renderer.queue.write_buffer(
            &renderer.buffers.instances,
            0,
            bytemuck::cast_slice(&instances),
        );
    }

    instances.len() as u32
}

fn draw_circles(renderer: &Renderer, pass: &mut RenderPass<'_>, instance_count: u32) {
    pass.set_pipeline(&renderer.pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    pass.set_vertex_buffer(0, renderer.circle.vertex_buffer.slice(..));
    pass.set_index_buffer(renderer.circle.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));
    pass.draw_indexed(0..renderer.circle.index_count, 0, 0..instance_count);
}
