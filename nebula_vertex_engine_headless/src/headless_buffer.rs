/// Buffer - headless implementation of the Buffer trait

use std::sync::Mutex;

use nebula_vertex_engine::engine_bail;
use nebula_vertex_engine::nebula::device::{Buffer, BufferDesc, BufferUsage};
use nebula_vertex_engine::nebula::{Error, Result};

/// Headless buffer backed by host memory
pub struct HeadlessBuffer {
    desc: BufferDesc,
    data: Mutex<Vec<u8>>,
}

impl HeadlessBuffer {
    pub fn new(desc: BufferDesc) -> Self {
        Self {
            data: Mutex::new(vec![0; desc.size as usize]),
            desc,
        }
    }

    /// Snapshot of the buffer's current contents
    pub fn contents(&self) -> Vec<u8> {
        self.data
            .lock()
            .map(|data| data.clone())
            .unwrap_or_default()
    }
}

impl Buffer for HeadlessBuffer {
    fn update(&self, offset: u64, data: &[u8]) -> Result<()> {
        let end = offset + data.len() as u64;
        if end > self.desc.size {
            engine_bail!(
                "nebula::headless",
                Error::InvalidResource(format!(
                    "buffer update of {} byte(s) at offset {} runs past the {}-byte end",
                    data.len(),
                    offset,
                    self.desc.size
                ))
            );
        }

        let mut contents = self
            .data
            .lock()
            .map_err(|_| Error::BackendError("buffer lock poisoned".to_string()))?;
        contents[offset as usize..end as usize].copy_from_slice(data);
        Ok(())
    }

    fn size(&self) -> u64 {
        self.desc.size
    }

    fn usage(&self) -> BufferUsage {
        self.desc.usage
    }
}
