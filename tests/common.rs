#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn orkpi() -> Command {
    cargo_bin_cmd!("orkpi")
}

/// Field extraction: OR4 sits outside the field locations, OR3 has a
/// trailing space and OR5 a non-breaking space in the status.
pub const EXTRACTION_CSV: &str = "OR;Planifié ?;Localisation;Position;Nom client;Type intervention
OR1;Planifié;MO EXTERIEUR;ATELIER;Client A;Entretien
OR2;Non planifié;MO EXTERIEUR;ATELIER;Client B;Dépannage
OR3;PLANIFIÉ ;MO CVA;ROUTE;Client C;Entretien
OR4;Non planifié;MO INTERIEUR;ATELIER;Client D;Dépannage
OR5;planifié\u{00A0};mo exterieur;ROUTE;Client E;Entretien
";

/// OR1: Dupont logs 2 + 1 hours first, Martin 5 hours afterwards.
/// OR5 has no timesheet line.
pub const TIMESHEET_CSV: &str = "OR (Numéro),Salarié - Nom,Salarié - Équipe(Nom),Heures
OR1,Dupont,Equipe Nord,2
OR1,Martin,Equipe Sud,5
OR1,Dupont,Equipe Nord,1
OR2,Durand,Equipe Nord,4
OR3,Leroy,Equipe Sud,3
OR4,Durand,Equipe Nord,1
";

/// OR1 is listed twice, OR3 has a blank manufacturer.
pub const EQUIPMENT_CSV: &str = "N° OR (Segment);Constructeur de l'équipement
OR1;Carrier
OR1;Daikin
OR2;Daikin
OR3; 
";

/// A temp dir holding the three input files and a (missing) config path.
pub struct Fixture {
    pub dir: TempDir,
    pub extraction: PathBuf,
    pub timesheet: PathBuf,
    pub equipment: PathBuf,
    pub config: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let extraction = write(dir.path(), "extraction.csv", EXTRACTION_CSV);
        let timesheet = write(dir.path(), "pointage.csv", TIMESHEET_CSV);
        let equipment = write(dir.path(), "equipements.csv", EQUIPMENT_CSV);
        let config = dir.path().join("orkpi.conf");
        Self {
            dir,
            extraction,
            timesheet,
            equipment,
            config,
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// `--config <tmp> <command> -x … -t … -q …`
    pub fn cmd(&self, command: &str) -> Command {
        let mut cmd = orkpi();
        cmd.arg("--config")
            .arg(&self.config)
            .arg(command)
            .arg("--extraction")
            .arg(&self.extraction)
            .arg("--timesheet")
            .arg(&self.timesheet)
            .arg("--equipment")
            .arg(&self.equipment);
        cmd
    }
}

pub fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}
