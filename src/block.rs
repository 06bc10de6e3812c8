use crate::crc::calculate_crc;

/// the metadata pair that gets checksummed on its own, separate from the payload
///
/// on the wire / in the menu this is:
///   [Block ID     (32 bits)]
///   [Block Length (32 bits)]
///
/// and the CRC runs over exactly those two words in that order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockHeader {
    pub id: u32,
    pub length: u32,
}

impl BlockHeader {
    pub const fn new(id: u32, length: u32) -> Self {
        Self { id, length }
    }

    /// `[id, length]`, the sequence the engine sees
    pub const fn words(&self) -> [u32; 2] {
        [self.id, self.length]
    }

    pub fn crc(&self) -> u32 {
        calculate_crc(&self.words())
    }
}

impl From<(u32, u32)> for BlockHeader {
    fn from((id, length): (u32, u32)) -> Self {
        Self::new(id, length)
    }
}
