/// A captured response header block used as benchmark input.
#[derive(Debug, Copy, Clone)]
pub struct HeaderBlock {
    name: &'static str,
    size: BlockSize,
    content: &'static str,
}

impl HeaderBlock {
    pub const fn new(name: &'static str, size: BlockSize, content: &'static str) -> Self {
        Self { name, size, content }
    }

    pub const fn small(name: &'static str, content: &'static str) -> Self {
        Self::new(name, BlockSize::Small, content)
    }

    pub const fn large(name: &'static str, content: &'static str) -> Self {
        Self::new(name, BlockSize::Large, content)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> BlockSize {
        self.size
    }

    pub fn content(&self) -> &'static str {
        self.content
    }

    /// Number of lines in the block, blank lines included.
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockSize {
    /// A handful of lines, mostly recognized headers
    Small,
    /// A full response header section with many unrecognized lines
    Large,
}

impl BlockSize {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockSize::Small => "small",
            BlockSize::Large => "large",
        }
    }
}
