use wgpu::{Device, Queue, Texture, TextureFormat, TextureView};

/// One texel per field cell, holding the composed RGBA frame.
///
/// The texel format follows the surface: on an sRGB surface the texture is
/// sRGB too, so the bytes written here are the bytes that reach the screen.
pub struct FrameTexture {
    texture: Texture,
    pub view: TextureView,
    width: u32,
    height: u32,
}

impl FrameTexture {
    pub fn new(device: &Device, width: u32, height: u32, surface_format: TextureFormat) -> Self {
        let format = if surface_format.is_srgb() {
            TextureFormat::Rgba8UnormSrgb
        } else {
            TextureFormat::Rgba8Unorm
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("field-frame"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            texture,
            view,
            width,
            height,
        }
    }

    /// Replace the texels with a row-major frame of packed RGBA values
    pub fn upload(&self, queue: &Queue, frame: &[u32]) {
        assert_eq!(
            frame.len(),
            (self.width * self.height) as usize,
            "Frame size mismatch"
        );
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            bytemuck::cast_slice(frame),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * self.width),
                rows_per_image: Some(self.height),
            },
            self.texture.size(),
        );
    }
}
