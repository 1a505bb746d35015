use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use sand_drepr::prelude::*;

/// Run the D-REPR command line program: the model & resources are written to the working
/// directory, the RDF is read from the standard output of the program.
pub struct ProcessEngine {
    pub program: String,
    pub workdir: PathBuf,
}

impl MappingEngine for ProcessEngine {
    fn convert(&self, repr: &DRepr, resources: &BTreeMap<String, ResourceData>, format: OutputFormat) -> Result<Vec<u8>> {
        let fmodel = self.workdir.join("model.yml");
        fs::write(&fmodel, repr.to_lang_yml()?).chain_err(|| format!("Cannot write model to {:?}", fmodel))?;

        let mut cmd = Command::new(&self.program);
        cmd.arg("-r").arg(&fmodel);
        for (resource_id, resource) in resources {
            let fresource = self.workdir.join(format!("{}.csv", resource_id));
            fs::write(&fresource, &resource.value).chain_err(|| format!("Cannot write resource to {:?}", fresource))?;
            cmd.arg("-d").arg(format!("{}={}", resource_id, fresource.display()));
        }
        cmd.arg("-f").arg(format.as_str());

        debug!("Run: {:?}", cmd);
        let output = cmd.output().chain_err(|| format!("Cannot run {}", self.program))?;
        if !output.status.success() {
            bail!(ErrorKind::Engine(String::from_utf8_lossy(&output.stderr).into_owned()));
        }
        Ok(output.stdout)
    }
}
