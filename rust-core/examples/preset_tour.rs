/// Walks through the built-in presets and the geometry derived from each
///
/// Shows solving lattice parameters, building the wireframe and atoms,
/// fitting a camera around the result and switching structures in a session.
use crystal_lattice::config::ViewerConfig;
use crystal_lattice::geometries::{OrthographicFrustum, build_hexagonal_prism};
use crystal_lattice::lattice::solve;
use crystal_lattice::structure::{CellShape, PresetCatalog, ViewerSession, build_structure};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Crystal Lattice Presets ===\n");

    // Example 1: Solve every preset and print its basis vectors
    println!("1. Lattice vectors:");
    for preset in PresetCatalog::global() {
        let vectors = solve(&preset.lattice)?;
        println!(
            "   {:<24} {:?} volume={:.3}",
            preset.name,
            preset.lattice.crystal_system(),
            vectors.cell_volume()
        );
    }

    // Example 2: Build a structure and inspect its geometry
    println!("\n2. Face-centered cubic structure:");
    let fcc = PresetCatalog::global().lookup("fcc")?;
    let structure = build_structure(fcc, CellShape::Parallelepiped, 2.0)?;
    println!("   Edges: {}", structure.edges.len());
    println!("   Atoms: {}", structure.atoms.len());
    for atom in structure.interior_atoms() {
        println!(
            "   {:?} at [{:.3}, {:.3}, {:.3}]",
            atom.kind, atom.position.x, atom.position.y, atom.position.z
        );
    }

    // Example 3: Camera framing
    println!("\n3. Framing:");
    let center = structure.fit.center;
    println!("   Center: [{:.3}, {:.3}, {:.3}]", center.x, center.y, center.z);
    let frustum = OrthographicFrustum::from_fit(&structure.fit, 16.0 / 9.0);
    println!(
        "   Frustum: left={:.3} right={:.3} top={:.3} bottom={:.3}",
        frustum.left, frustum.right, frustum.top, frustum.bottom
    );

    // Example 4: Hexagonal prism wireframe
    println!("\n4. Hexagonal prism (a=1, c=2):");
    let prism = build_hexagonal_prism(1.0, 2.0);
    println!("   {} edges, first from {:?} to {:?}", prism.len(), prism[0].start, prism[0].end);

    // Example 5: Session switching with a stale key
    println!("\n5. Session:");
    let mut session = ViewerSession::new(ViewerConfig::default());
    session.select("hcp")?;
    if let Err(err) = session.select("wurtzite") {
        println!("   Rejected: {}", err);
    }
    println!("   Still showing: {:?}", session.current_key());

    Ok(())
}
