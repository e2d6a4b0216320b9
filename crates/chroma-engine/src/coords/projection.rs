use super::{Vec2, Viewport};

/// Orthographic 2D projection from logical pixels to clip space.
///
/// `(0, 0)` is the top-left corner and maps to NDC `(-1, 1)`;
/// `(width, height)` maps to `(1, -1)`. Depth is passed through as 0.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection {
    viewport: Viewport,
}

impl Projection {
    pub fn orthographic(viewport: Viewport) -> Self {
        debug_assert!(viewport.is_valid(), "projection over an empty viewport");
        Self { viewport }
    }

    /// Column-major 4x4 matrix for a WGSL `mat4x4<f32>` uniform.
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        let w = self.viewport.width.max(1.0);
        let h = self.viewport.height.max(1.0);

        [
            [2.0 / w, 0.0, 0.0, 0.0],
            [0.0, -2.0 / h, 0.0, 0.0],
            [0.0, 0.0, -1.0, 0.0],
            [-1.0, 1.0, 0.0, 1.0],
        ]
    }

    /// Same mapping as the matrix, for CPU-side checks.
    pub fn to_ndc(&self, p: Vec2) -> Vec2 {
        let m = self.to_cols_array_2d();
        Vec2::new(
            m[0][0] * p.x + m[1][0] * p.y + m[3][0],
            m[0][1] * p.x + m[1][1] * p.y + m[3][1],
        )
    }
}
