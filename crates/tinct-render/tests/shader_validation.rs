//! Parses and validates the WGSL variants with naga, without a GPU.

use std::collections::BTreeSet;

use tinct_render::render::shader_source;
use tinct_render::SrgbMode;

const MODES: [SrgbMode; 2] = [SrgbMode::None, SrgbMode::Srgb];

fn parse(mode: SrgbMode) -> naga::Module {
    match naga::front::wgsl::parse_str(shader_source(mode)) {
        Ok(module) => module,
        Err(err) => panic!("{mode:?}: {}", err.emit_to_string(shader_source(mode))),
    }
}

#[test]
fn every_variant_validates() {
    for mode in MODES {
        let module = parse(mode);
        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        if let Err(err) = validator.validate(&module) {
            panic!("{mode:?}: {err:?}");
        }
    }
}

#[test]
fn entry_points_match_pipeline() {
    for mode in MODES {
        let module = parse(mode);
        let has = |name: &str, stage: naga::ShaderStage| {
            module.entry_points.iter().any(|ep| ep.name == name && ep.stage == stage)
        };
        assert!(has("vs_main", naga::ShaderStage::Vertex), "{mode:?}");
        assert!(has("fs_main", naga::ShaderStage::Fragment), "{mode:?}");
    }
}

#[test]
fn bindings_match_layouts() {
    for mode in MODES {
        let module = parse(mode);
        let bindings: BTreeSet<_> = module
            .global_variables
            .iter()
            .filter_map(|(_, var)| var.binding.as_ref())
            .map(|b| (b.group, b.binding))
            .collect();
        let expected: BTreeSet<_> = [(0, 0), (1, 0), (1, 1)].into_iter().collect();
        assert_eq!(bindings, expected, "{mode:?}");
    }
}
