/// Circular cursor over one group of slides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rotation {
    len: usize,
    index: usize,
}

impl Rotation {
    /// Groups with one slide or none have nothing to rotate.
    pub fn new(len: usize) -> Option<Self> {
        (len > 1).then_some(Self { len, index: 0 })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.index
    }

    /// Whether slide `i` should carry the active mark right now.
    pub fn is_active(&self, i: usize) -> bool {
        i == self.index
    }

    /// Step forward; returns `(deactivate, activate)`.
    pub fn advance(&mut self) -> (usize, usize) {
        let prev = self.index;
        self.index = (self.index + 1) % self.len;
        (prev, self.index)
    }
}
