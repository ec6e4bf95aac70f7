#[cfg(test)]
mod module {
    use dotgram_schema::SchemaModule;

    fn test(name: &str) {
        let file = format!("../../grammar/{}.toml", name);
        let module = SchemaModule::load(&file).unwrap();
        let table = module.build().unwrap();
        dbg!(table.warnings());
        assert!(table.warnings().is_empty());
        assert!(!table.is_empty());
    }

    include!(concat!(env!("OUT_DIR"), "/test.rs"));
}

#[cfg(test)]
mod liberty {
    use dotgram_grammar::HeaderKind;
    use dotgram_schema::Manifest;
    use std::fs;

    fn handler(table: &dotgram_grammar::GrammarTable, group: &str, key: &str) -> String {
        table.handler(group, key).unwrap().to_string()
    }

    #[test]
    fn check() {
        let manifest_path = Manifest::search_from_current().unwrap();
        let manifest = Manifest::load(&manifest_path).unwrap();
        assert_eq!(manifest.grammar.name, "liberty");

        let table = manifest.build().unwrap();
        dbg!(table.warnings());
        assert!(table.warnings().is_empty());
        assert!(table.check().is_ok());

        // every module of the grammar directory is listed in the manifest
        let modules = fs::read_dir("../../grammar").unwrap().count();
        assert_eq!(manifest.module_paths().len(), modules);

        assert_eq!(table.groups().count(), 83);
        assert_eq!(table.header("library"), Some(HeaderKind::Str));
        assert_eq!(table.header("ff_bank"), Some(HeaderKind::StrStrInt));
        assert_eq!(table.header("test_cell"), Some(HeaderKind::Empty));

        assert_eq!(
            handler(&table, "library", "output_threshold_pct_rise"),
            "simple_float"
        );
        assert_eq!(
            handler(&table, "library", "k_volt_setup_fall"),
            "simple_float"
        );
        assert_eq!(handler(&table, "cell", "pin"), "group_pin");
        assert_eq!(handler(&table, "bus", "bus_type"), "simple_string");
        assert_eq!(handler(&table, "bus", "timing"), "group_timing");
        assert_eq!(handler(&table, "timing", "sdf_cond_end"), "simple_function");
        assert_eq!(handler(&table, "timing", "rise_constraint"), "group_table");
        assert_eq!(
            handler(&table, "pin", "fall_capacitance_range"),
            "complex_float_float"
        );
        assert_eq!(handler(&table, "internal_power", "power"), "group_power");

        assert_eq!(handler(&table, "model", "short"), "complex_string");
        assert_eq!(handler(&table, "scaled_cell", "area"), "simple_float");
        assert!(table.handler("model", "pin").is_none());
        assert!(table.handler("scaled_cell", "ff").is_none());
        assert_eq!(handler(&table, "bundle", "members"), "complex_string");
        assert!(table.handler("bundle", "fall_capacitance_range").is_none());
        assert!(table.handler("bus", "power_gating_pin").is_none());
        assert_eq!(handler(&table, "ff_bank", "next_state"), "simple_function");
    }
}
