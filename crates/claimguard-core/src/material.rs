//! Materials, item stacks and slot inventories.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Largest amount a single stack may hold.
pub const MAX_STACK_SIZE: u32 = 64;

/// Block or item material.
///
/// Only the materials the rules reason about are named; everything else the
/// host knows travels as [`Material::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Air,
    Chest,
    Fire,
    Piston,
    StickyPiston,
    Dispenser,
    Water,
    Lava,
    WaterBucket,
    LavaBucket,
    Sapling,
    Grass,
    Dirt,
    Cobblestone,
    Torch,
    Gravel,
    Sand,
    Tnt,
    Workbench,
    Sign,
    Other(String),
}

impl Material {
    pub fn is_air(&self) -> bool {
        matches!(self, Material::Air)
    }

    /// Bucket items that place a world-altering fluid when dispensed.
    pub fn is_fluid_bucket(&self) -> bool {
        matches!(self, Material::WaterBucket | Material::LavaBucket)
    }

    /// Low-value blocks that never trigger the outside-claim warning.
    pub fn default_trash() -> Vec<Material> {
        vec![
            Material::Cobblestone,
            Material::Torch,
            Material::Dirt,
            Material::Sapling,
            Material::Gravel,
            Material::Sand,
            Material::Tnt,
            Material::Workbench,
        ]
    }
}

/// Game mode of an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    Survival,
    Creative,
    Adventure,
}

/// A non-empty stack of identical items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub material: Material,
    amount: u32,
}

impl ItemStack {
    /// Create a stack of `amount` items (1..=64).
    pub fn new(material: Material, amount: u32) -> Result<Self> {
        if amount == 0 {
            return Err(CoreError::EmptyStack(amount));
        }
        if amount > MAX_STACK_SIZE {
            return Err(CoreError::OversizedStack {
                amount,
                max: MAX_STACK_SIZE,
            });
        }
        Ok(Self { material, amount })
    }

    /// A single item.
    pub fn one(material: Material) -> Self {
        Self {
            material,
            amount: 1,
        }
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Whether the stack holds anything worth donating (air is nothing).
    pub fn is_empty(&self) -> bool {
        self.material.is_air()
    }
}

/// Fixed-size container of optional stacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    slots: Vec<Option<ItemStack>>,
}

impl Inventory {
    /// An empty inventory with `size` slots.
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size],
        }
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, slot: usize) -> Option<&ItemStack> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub fn set(&mut self, slot: usize, stack: Option<ItemStack>) -> Result<()> {
        let size = self.slots.len();
        let target = self
            .slots
            .get_mut(slot)
            .ok_or(CoreError::SlotOutOfRange { slot, size })?;
        *target = stack;
        Ok(())
    }

    /// Index of the first slot holding nothing.
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Total count of `material` across all slots.
    pub fn count(&self, material: &Material) -> u32 {
        self.slots
            .iter()
            .flatten()
            .filter(|s| &s.material == material)
            .map(|s| s.amount)
            .sum()
    }

    /// Add a stack, topping up partial stacks of the same material first and
    /// spilling the rest into empty slots.
    ///
    /// Returns whatever could not be stored.
    pub fn add_item(&mut self, stack: ItemStack) -> Option<ItemStack> {
        let material = stack.material;
        let mut remaining = stack.amount;

        for existing in self.slots.iter_mut().flatten() {
            if remaining == 0 {
                break;
            }
            if existing.material == material && existing.amount < MAX_STACK_SIZE {
                let moved = remaining.min(MAX_STACK_SIZE - existing.amount);
                existing.amount += moved;
                remaining -= moved;
            }
        }

        for slot in self.slots.iter_mut().filter(|s| s.is_none()) {
            if remaining == 0 {
                break;
            }
            let moved = remaining.min(MAX_STACK_SIZE);
            *slot = Some(ItemStack {
                material: material.clone(),
                amount: moved,
            });
            remaining -= moved;
        }

        (remaining > 0).then_some(ItemStack {
            material,
            amount: remaining,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_bounds() {
        assert_eq!(
            ItemStack::new(Material::Dirt, 0),
            Err(CoreError::EmptyStack(0))
        );
        assert!(matches!(
            ItemStack::new(Material::Dirt, 65),
            Err(CoreError::OversizedStack { amount: 65, .. })
        ));
        assert_eq!(ItemStack::new(Material::Dirt, 64).unwrap().amount(), 64);
    }

    #[test]
    fn test_first_empty() {
        let mut inv = Inventory::new(3);
        assert_eq!(inv.first_empty(), Some(0));
        inv.set(0, Some(ItemStack::one(Material::Torch))).unwrap();
        assert_eq!(inv.first_empty(), Some(1));
        inv.set(1, Some(ItemStack::one(Material::Torch))).unwrap();
        inv.set(2, Some(ItemStack::one(Material::Torch))).unwrap();
        assert_eq!(inv.first_empty(), None);
    }

    #[test]
    fn test_set_out_of_range() {
        let mut inv = Inventory::new(1);
        assert_eq!(
            inv.set(4, None),
            Err(CoreError::SlotOutOfRange { slot: 4, size: 1 })
        );
    }

    #[test]
    fn test_add_item_merges_before_using_empty_slots() {
        let mut inv = Inventory::new(3);
        inv.set(1, Some(ItemStack::new(Material::Sand, 60).unwrap()))
            .unwrap();

        let leftover = inv.add_item(ItemStack::new(Material::Sand, 10).unwrap());
        assert!(leftover.is_none());
        assert_eq!(inv.get(1).unwrap().amount(), 64);
        assert_eq!(inv.get(0).unwrap().amount(), 6);
        assert!(inv.get(2).is_none());
        assert_eq!(inv.count(&Material::Sand), 70);
    }

    #[test]
    fn test_add_item_reports_leftover() {
        let mut inv = Inventory::new(1);
        inv.set(0, Some(ItemStack::new(Material::Gravel, 64).unwrap()))
            .unwrap();
        let leftover = inv.add_item(ItemStack::new(Material::Gravel, 5).unwrap());
        assert_eq!(leftover.map(|s| s.amount()), Some(5));
    }

    #[test]
    fn test_material_serde_names() {
        let json = serde_json::to_string(&Material::WaterBucket).unwrap();
        assert_eq!(json, "\"water_bucket\"");
        let m: Material = serde_json::from_str("\"cobblestone\"").unwrap();
        assert_eq!(m, Material::Cobblestone);
    }
}
