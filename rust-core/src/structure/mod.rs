// Structure module: Preset catalog, structure assembly and the interactive session
// Everything the rendering layer consumes is produced here

// ======================== MODULE DECLARATIONS ========================
pub mod crystal_structure;
pub mod presets;
pub mod session;


// ======================== PRESET CATALOG ========================
pub use presets::{
    PresetCatalog,   // struct - read-only registry of named presets
    StructurePreset, // struct - display name, lattice parameters, basis and atom radius
};
// PresetCatalog impl methods:
//   global() -> &'static PresetCatalog                       - the built-in catalog
//   lookup(&self, key: &str) -> Result<&StructurePreset>     - find a preset or UnknownPreset
//   contains(&self, key: &str) -> bool                       - membership test
//   keys(&self) -> impl Iterator<Item = &'static str>        - keys in display order
//   iter(&self) -> Iter<StructurePreset>                     - presets in display order

// ======================== STRUCTURE ASSEMBLY ========================
pub use crystal_structure::{
    CellShape,        // enum - Parallelepiped or HexagonalPrism wireframe
    CrystalStructure, // struct - vectors, edges, atoms and fit of one structure
    build_preset,     // fn(key, shape, padding) -> Result<CrystalStructure> - lookup + build
    build_structure,  // fn(preset, shape, padding) -> Result<CrystalStructure> - build a preset
};

// ======================== SESSION ========================
pub use session::ViewerSession; // struct - owns and swaps the displayed structure
