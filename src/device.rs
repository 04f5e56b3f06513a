use std::io::Write;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

/// A display sink. Frames are handed over fire-and-forget.
pub trait Device {
    fn write(&mut self, bytes: &[u8]);
}

/// Device handle as held by a grid: the caller owns the device.
pub type DeviceRef = Weak<Mutex<dyn Device>>;

pub fn downgrade<D: Device + 'static>(device: &Arc<Mutex<D>>) -> DeviceRef {
    let device: Arc<Mutex<dyn Device>> = device.clone();
    Arc::downgrade(&device)
}

/// Keeps every frame it is given.
#[derive(Debug, Default)]
pub struct RecordingDevice {
    frames: Vec<Vec<u8>>,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Vec<u8>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[u8]> {
        self.frames.last().map(Vec::as_slice)
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl Device for RecordingDevice {
    fn write(&mut self, bytes: &[u8]) {
        self.frames.push(bytes.to_vec());
    }
}

/// Forwards frames to any [`std::io::Write`] implementor.
pub struct WriterDevice<W: Write> {
    writer: W,
}

impl<W: Write> WriterDevice<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Device for WriterDevice<W> {
    fn write(&mut self, bytes: &[u8]) {
        if let Err(err) = self
            .writer
            .write_all(bytes)
            .and_then(|_| self.writer.flush())
        {
            log::warn!("dropped frame of {} bytes: {err}", bytes.len());
        }
    }
}
