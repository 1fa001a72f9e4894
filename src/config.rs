//! Command line configuration of a verification run and loading of the election record
use crate::{
    context::{ConstantsRecord, ContextRecord, ElectionContext},
    error::{Error, Result},
    limits::{ElectionDescription, VoteLimitTable},
    records::Ballot,
};
use serde::de::DeserializeOwned;
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const USAGE: &str = "usage: ballot-verifier --constants <file> --context <file> \
--description <file> [--strict-subgroup] [--threads <n>] <ballot file or directory>...";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub constants: PathBuf,
    pub context: PathBuf,
    pub description: PathBuf,

    /// Ballot files, or directories whose `*.json` files are ballots
    pub ballots: Vec<PathBuf>,

    /// Also require subgroup membership (x ** Q = 1 mod P) for group elements
    pub strict_subgroup: bool,

    /// Size of the worker pool; rayon's default when absent
    pub threads: Option<usize>,
}

impl Config {
    /// Parse the arguments that follow the program name
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut constants = None;
        let mut context = None;
        let mut description = None;
        let mut config = Self::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--constants" => constants = Some(PathBuf::from(Self::value(&arg, args.next())?)),
                "--context" => context = Some(PathBuf::from(Self::value(&arg, args.next())?)),
                "--description" => {
                    description = Some(PathBuf::from(Self::value(&arg, args.next())?))
                }
                "--strict-subgroup" => config.strict_subgroup = true,
                "--threads" => {
                    let value = Self::value(&arg, args.next())?;
                    let threads = value
                        .parse::<usize>()
                        .ok()
                        .filter(|threads| *threads > 0)
                        .ok_or_else(|| {
                            Error::Usage(format!("--threads expects a positive integer\n{USAGE}"))
                        })?;
                    config.threads = Some(threads);
                }
                flag if flag.starts_with("--") => {
                    return Err(Error::Usage(format!("unknown option {flag}\n{USAGE}")));
                }
                _ => config.ballots.push(PathBuf::from(&arg)),
            }
        }

        config.constants = Self::required(constants, "--constants")?;
        config.context = Self::required(context, "--context")?;
        config.description = Self::required(description, "--description")?;
        if config.ballots.is_empty() {
            return Err(Error::Usage(format!("no ballots given\n{USAGE}")));
        }
        return Ok(config);
    }

    fn value(flag: &str, value: Option<String>) -> Result<String> {
        return value.ok_or_else(|| Error::Usage(format!("{flag} expects a value\n{USAGE}")));
    }

    fn required(value: Option<PathBuf>, flag: &str) -> Result<PathBuf> {
        return value.ok_or_else(|| Error::Usage(format!("missing {flag}\n{USAGE}")));
    }

    pub fn load_context(&self) -> Result<ElectionContext> {
        let constants: ConstantsRecord = load_json(&self.constants)?;
        let context: ContextRecord = load_json(&self.context)?;
        let context = ElectionContext::from_records(&constants, &context)?;
        return Ok(context.with_strict_subgroup(self.strict_subgroup));
    }

    pub fn load_limits(&self) -> Result<VoteLimitTable> {
        let description: ElectionDescription = load_json(&self.description)?;
        let limits = VoteLimitTable::from_description(&description);
        log::debug!("{} contests with a vote limit", limits.len());
        return Ok(limits);
    }

    /// Every ballot file, with directories expanded to their `*.json` entries in name order
    pub fn ballot_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = vec![];
        for path in self.ballots.iter() {
            if !path.is_dir() {
                files.push(path.clone());
                continue;
            }
            let entries = fs::read_dir(path).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
            let mut found = vec![];
            for entry in entries {
                let entry = entry.map_err(|source| Error::Io {
                    path: path.clone(),
                    source,
                })?;
                let file = entry.path();
                if file.is_file() && file.extension().is_some_and(|ext| ext == "json") {
                    found.push(file);
                }
            }
            found.sort();
            files.extend(found);
        }
        return Ok(files);
    }

    pub fn load_ballots(&self) -> Result<Vec<Ballot>> {
        return self
            .ballot_files()?
            .iter()
            .map(|path| load_json(path))
            .collect();
    }
}

/// Read and deserialize one JSON file
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    return serde_json::from_str(&text).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    });
}
