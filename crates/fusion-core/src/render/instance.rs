use crate::particle::ParticleSet;

/// Per-droplet record for hosts that draw particles themselves
/// (e.g. instanced WebGL quads). 32 bytes, tightly packed.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 2], //  8 bytes
    pub radius: f32,        //  4 bytes
    pub alpha: f32,         //  4 bytes
    pub color: [f32; 4],    // 16 bytes, rgb + paint opacity
}

/// Refill `out` with one instance per particle.
pub fn write_instances(particles: &ParticleSet, out: &mut Vec<ParticleInstance>) {
    out.clear();
    out.extend((0..particles.count).map(|i| {
        let pos = particles.position[i];
        let paint = particles.paint[i];
        let [r, g, b] = paint.rgb.to_unit();
        ParticleInstance {
            position: [pos.x, pos.y],
            radius: particles.radius[i],
            alpha: particles.alpha[i],
            color: [r, g, b, paint.opacity],
        }
    }));
}
