use crate::utils;
use crate::OptCheck;
use log::info;
use miette::Result;

pub struct CmdCheck {
    opt: OptCheck,
}

impl CmdCheck {
    pub fn new(opt: OptCheck) -> Self {
        Self { opt }
    }

    pub fn exec(&self) -> Result<()> {
        let paths = utils::module_paths(&self.opt.modules)?;
        let table = utils::load_table(&paths)?;

        table.check()?;

        info!(
            "Checked grammar ({} groups, {} keys)",
            table.groups().count(),
            table.entries().count()
        );

        Ok(())
    }
}
