use bitvec::prelude::*;

pub trait PackBitvecFieldType {
    fn pack_into_bitvec(&self, bits: &mut BitVec<u8, Msb0>, width: usize);
}

impl PackBitvecFieldType for u128 {
    fn pack_into_bitvec(&self, bits: &mut BitVec<u8, Msb0>, width: usize) {
        assert!(width > 0, "Width must be at least 1");

        // Ensure that width does not exceed the size of the integer type
        assert!(width <= 128, "Width exceeds the bit size of the given type");

        for i in (0..width).rev() {
            bits.push(((*self) >> i) & 1 != 0);
        }
    }
}

impl PackBitvecFieldType for u32 {
    fn pack_into_bitvec(&self, bits: &mut BitVec<u8, Msb0>, width: usize) {
        assert!(width <= 32, "Width exceeds the bit size of the given type");
        let field: u128 = (*self).into();
        field.pack_into_bitvec(bits, width);
    }
}
