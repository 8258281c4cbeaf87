//! In-memory host: a captured block of process memory plus type metadata.
//!
//! Reads are little-endian and bounds-checked against the captured block;
//! anything outside it is reported as `HostError::OutOfBounds`.
use serde::{Deserialize, Serialize};

use crate::error::HostError;
use crate::types::{Encoding, TypeDescriptor};
use crate::value::{InspectedValue, Scalar};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    base_address: u64,
    bytes: Vec<u8>,
}

impl Snapshot {
    pub fn new(base_address: u64, bytes: Vec<u8>) -> Self {
        Self {
            base_address,
            bytes,
        }
    }

    pub fn base_address(&self) -> u64 {
        self.base_address
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn read(&self, address: u64, len: usize) -> Result<&[u8], HostError> {
        let out_of_bounds = HostError::OutOfBounds { address, len };
        let start = address
            .checked_sub(self.base_address)
            .ok_or_else(|| out_of_bounds.clone())? as usize;
        let end = start.checked_add(len).ok_or_else(|| out_of_bounds.clone())?;
        self.bytes.get(start..end).ok_or(out_of_bounds)
    }

    /// Overwrites bytes in place, e.g. to simulate the process running on.
    pub fn write(&mut self, address: u64, data: &[u8]) -> Result<(), HostError> {
        let out_of_bounds = HostError::OutOfBounds {
            address,
            len: data.len(),
        };
        let start = address
            .checked_sub(self.base_address)
            .ok_or_else(|| out_of_bounds.clone())? as usize;
        let slot = self
            .bytes
            .get_mut(start..start.saturating_add(data.len()))
            .ok_or(out_of_bounds)?;
        slot.copy_from_slice(data);
        Ok(())
    }

    pub fn value(&self, ty: TypeDescriptor, address: u64) -> SnapshotValue<'_> {
        SnapshotValue {
            snapshot: self,
            ty,
            address,
        }
    }
}

/// Typed view of a location inside a `Snapshot`.
#[derive(Debug, Clone)]
pub struct SnapshotValue<'a> {
    snapshot: &'a Snapshot,
    ty: TypeDescriptor,
    address: u64,
}

impl<'a> SnapshotValue<'a> {
    fn at(&self, ty: TypeDescriptor, address: u64) -> Self {
        Self {
            snapshot: self.snapshot,
            ty,
            address,
        }
    }
}

/// `base + index * stride`, failing instead of leaving the address space.
fn offset_address(base: u64, index: usize, stride: usize) -> Result<u64, HostError> {
    index
        .checked_mul(stride)
        .and_then(|delta| base.checked_add(delta as u64))
        .ok_or(HostError::OutOfBounds {
            address: base,
            len: usize::MAX,
        })
}

fn fixed<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[..N]);
    out
}

impl<'a> InspectedValue for SnapshotValue<'a> {
    fn type_descriptor(&self) -> &TypeDescriptor {
        &self.ty
    }

    fn address(&self) -> u64 {
        self.address
    }

    fn cast(&self, ty: &TypeDescriptor) -> Result<Self, HostError> {
        Ok(self.at(ty.clone(), self.address))
    }

    fn field(&self, name: &str) -> Result<Self, HostError> {
        let field = self.ty.field(name).ok_or_else(|| HostError::NoSuchField {
            type_name: self.ty.name().to_string(),
            field: name.to_string(),
        })?;
        let address = offset_address(self.address, field.offset, 1)?;
        Ok(self.at(field.ty.clone(), address))
    }

    fn element(&self, index: usize) -> Result<Self, HostError> {
        let (low, high) = self
            .ty
            .range()
            .ok_or_else(|| HostError::NotAnArray(self.ty.name().to_string()))?;
        let in_range = i64::try_from(index)
            .ok()
            .zip(high.checked_sub(low))
            .map_or(false, |(index, last)| index <= last);
        if !in_range {
            return Err(HostError::IndexOutOfRange {
                type_name: self.ty.name().to_string(),
                index,
            });
        }
        let element = self
            .ty
            .array_element()
            .ok_or_else(|| HostError::NotAnArray(self.ty.name().to_string()))?;
        let address = offset_address(self.address, index, element.size())?;
        Ok(self.at(element.clone(), address))
    }

    fn read_array(&self, element: &TypeDescriptor, count: usize) -> Result<Vec<Self>, HostError> {
        let stride = element.size();
        if stride == 0 && count > 0 {
            return Err(HostError::UnsupportedScalarSize {
                type_name: element.name().to_string(),
                size: 0,
            });
        }
        let len = stride.checked_mul(count).ok_or(HostError::OutOfBounds {
            address: self.address,
            len: usize::MAX,
        })?;
        // the whole run is readable, so no element offset below can overflow
        self.snapshot.read(self.address, len)?;
        Ok((0..count)
            .map(|idx| self.at(element.clone(), self.address + (idx * stride) as u64))
            .collect())
    }

    fn scalar(&self) -> Result<Scalar, HostError> {
        let encoding = self
            .ty
            .encoding()
            .ok_or_else(|| HostError::NotAScalar(self.ty.name().to_string()))?;
        let size = self.ty.size();
        let bytes = self.snapshot.read(self.address, size)?;
        let scalar = match (encoding, size) {
            (Encoding::Float, 4) => Scalar::Float(f32::from_le_bytes(fixed(bytes))),
            (Encoding::Float, 8) => Scalar::Double(f64::from_le_bytes(fixed(bytes))),
            (Encoding::Signed, 1) => Scalar::Signed(i8::from_le_bytes(fixed(bytes)) as i64),
            (Encoding::Signed, 2) => Scalar::Signed(i16::from_le_bytes(fixed(bytes)) as i64),
            (Encoding::Signed, 4) => Scalar::Signed(i32::from_le_bytes(fixed(bytes)) as i64),
            (Encoding::Signed, 8) => Scalar::Signed(i64::from_le_bytes(fixed(bytes))),
            (Encoding::Unsigned, 1) => Scalar::Unsigned(bytes[0] as u64),
            (Encoding::Unsigned, 2) => Scalar::Unsigned(u16::from_le_bytes(fixed(bytes)) as u64),
            (Encoding::Unsigned, 4) => Scalar::Unsigned(u32::from_le_bytes(fixed(bytes)) as u64),
            (Encoding::Unsigned, 8) => Scalar::Unsigned(u64::from_le_bytes(fixed(bytes))),
            (Encoding::Bool, 1) => Scalar::Bool(bytes[0] != 0),
            _ => {
                return Err(HostError::UnsupportedScalarSize {
                    type_name: self.ty.name().to_string(),
                    size,
                })
            }
        };
        Ok(scalar)
    }
}

/// Lays out values back to back and records where each one starts.
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    base_address: u64,
    bytes: Vec<u8>,
}

impl SnapshotBuilder {
    pub fn new(base_address: u64) -> Self {
        Self {
            base_address,
            bytes: Vec::new(),
        }
    }

    /// Address the next pushed value will land at.
    pub fn cursor(&self) -> u64 {
        self.base_address + self.bytes.len() as u64
    }

    pub fn push_bytes(&mut self, data: &[u8]) -> u64 {
        let address = self.cursor();
        self.bytes.extend_from_slice(data);
        address
    }

    pub fn push_f32(&mut self, value: f32) -> u64 {
        self.push_bytes(&value.to_le_bytes())
    }

    pub fn push_f64(&mut self, value: f64) -> u64 {
        self.push_bytes(&value.to_le_bytes())
    }

    pub fn push_i16(&mut self, value: i16) -> u64 {
        self.push_bytes(&value.to_le_bytes())
    }

    pub fn push_i32(&mut self, value: i32) -> u64 {
        self.push_bytes(&value.to_le_bytes())
    }

    pub fn push_u32(&mut self, value: u32) -> u64 {
        self.push_bytes(&value.to_le_bytes())
    }

    pub fn push_bool(&mut self, value: bool) -> u64 {
        self.push_bytes(&[value as u8])
    }

    pub fn build(self) -> Snapshot {
        Snapshot::new(self.base_address, self.bytes)
    }
}

/// Root of a snapshot file: which value to inspect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootValue {
    pub ty: TypeDescriptor,
    pub address: u64,
}

/// JSON-serializable capture of one inspected value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotFile {
    pub snapshot: Snapshot,
    pub root: RootValue,
}

impl SnapshotFile {
    pub fn root_value(&self) -> SnapshotValue<'_> {
        self.snapshot.value(self.root.ty.clone(), self.root.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_rejects_addresses_outside_capture() {
        let snap = Snapshot::new(0x1000, vec![0; 8]);
        assert!(snap.read(0x1000, 8).is_ok());
        assert_eq!(
            snap.read(0x1004, 8),
            Err(HostError::OutOfBounds {
                address: 0x1004,
                len: 8
            })
        );
        assert!(snap.read(0x0fff, 1).is_err());
    }

    #[test]
    fn element_offsets_that_overflow_are_rejected() {
        let snap = Snapshot::new(u64::MAX - 8, vec![0; 8]);
        let float = TypeDescriptor::scalar("float", 4, Encoding::Float);
        let arr = TypeDescriptor::array_of(&float, usize::MAX);
        let value = snap.value(arr, u64::MAX - 8);
        assert!(matches!(
            value.element(usize::MAX / 4),
            Err(HostError::OutOfBounds { .. })
        ));
        assert!(matches!(
            value.read_array(&float, usize::MAX / 2),
            Err(HostError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn scalars_decode_little_endian() {
        let mut builder = SnapshotBuilder::new(0x2000);
        let a = builder.push_i16(-3);
        let b = builder.push_f64(0.5);
        let snap = builder.build();
        let short = TypeDescriptor::scalar("short", 2, Encoding::Signed);
        let double = TypeDescriptor::scalar("double", 8, Encoding::Float);
        assert_eq!(snap.value(short, a).scalar(), Ok(Scalar::Signed(-3)));
        assert_eq!(snap.value(double, b).scalar(), Ok(Scalar::Double(0.5)));
    }
}
