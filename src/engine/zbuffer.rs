/// Per-column wall depth, written by the column sweep and consulted by
/// the sprite pass.  Lives for one frame.
pub struct ZBuffer {
    depths: Vec<f32>,
}

impl ZBuffer {
    pub fn filled(columns: usize, depth: f32) -> Self {
        Self {
            depths: vec![depth; columns],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.depths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    #[inline]
    pub fn set(&mut self, col: usize, depth: f32) {
        if let Some(d) = self.depths.get_mut(col) {
            *d = depth;
        }
    }

    /// Depth at `col`; out-of-range reads as 0 so nothing passes the
    /// strict nearer-than test.
    #[inline]
    pub fn depth(&self, col: usize) -> f32 {
        self.depths.get(col).copied().unwrap_or(0.0)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
