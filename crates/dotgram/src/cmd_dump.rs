use crate::utils;
use crate::OptDump;
use miette::Result;

pub struct CmdDump {
    opt: OptDump,
}

impl CmdDump {
    pub fn new(opt: OptDump) -> Self {
        Self { opt }
    }

    pub fn exec(&self) -> Result<()> {
        print!("{}", self.render()?);
        Ok(())
    }

    /// Listing selected by `--groups` / `--required`, or the full table
    pub fn render(&self) -> Result<String> {
        let paths = utils::module_paths(&self.opt.modules)?;
        let table = utils::load_table(&paths)?;

        let mut ret = String::new();

        if self.opt.groups {
            ret.push_str(&table.dump_groups());
        }

        if self.opt.required {
            ret.push_str(&table.dump_required());
        }

        if !self.opt.groups && !self.opt.required {
            ret.push_str(&table.to_string());
        }

        Ok(ret)
    }
}
