//! End-to-end author list tests
//!
//! Load roster and database documents from disk and check the generated
//! text for every output mode.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use db2authors::commands::{generate, generation_banner, GenerateOptions};
use db2authors::{
    AuthorDb, AuthorListError, AuthorListRenderer, InputPaths, OutputMode, Roster,
};

const AUTHOR_DB: &str = r#"
authors:
  jdoe:
    name: Doe
    initials: J.
    orcid: 0000-0002-0000-0001
    email: jdoe@example.org
    affil: [X]
  asmith:
    name: Smith Jones
    initials: A.B.
    email: asmith@example.org
    affil: [X, Y]
    altaffil: [Hubble Fellow]
  pwong:
    name: Wong
    initials: P. Q.
    orcid: ~
    affil: [Z, Y]
affiliations:
  X: Vera C. Rubin Observatory, 950 N Cherry Ave, Tucson, AZ 85719, USA
  Y: Department of Astronomy, University of Washington, Seattle, WA 98195, USA
  Z: Kavli Institute, Stanford, CA 94305, USA
"#;

struct Fixture {
    _dir: TempDir,
    paths: InputPaths,
}

fn fixture(roster: &str) -> Fixture {
    let dir = TempDir::new().unwrap();
    let authors = dir.path().join("authors.yaml");
    let db = dir.path().join("authordb.yaml");
    fs::write(&authors, roster).unwrap();
    fs::write(&db, AUTHOR_DB).unwrap();
    Fixture {
        _dir: dir,
        paths: InputPaths::resolve(Some(authors), Some(db)),
    }
}

fn run(fixture: &Fixture, mode: OutputMode, no_affil: bool) -> anyhow::Result<String> {
    let options = GenerateOptions {
        mode,
        no_affil,
        paths: fixture.paths.clone(),
    };
    let mut out = Vec::new();
    generate(&options, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn body(output: &str, mode: OutputMode) -> String {
    output
        .strip_prefix(&generation_banner(mode, false))
        .expect("output starts with the banner")
        .to_string()
}

// =============================================================================
// Output modes
// =============================================================================

mod mode_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_aas_output() {
        let fx = fixture("- jdoe\n- asmith\n");
        let out = run(&fx, OutputMode::Aas, false).unwrap();

        assert_eq!(
            body(&out, OutputMode::Aas),
            "\\author[0000-0002-0000-0001]{~J.~Doe}\n\
             \\affiliation{Vera C. Rubin Observatory, 950 N Cherry Ave, Tucson, AZ 85719, USA}\n\
             \n\
             \\author{~A.~B.~Smith~Jones}\n\
             \\altaffiliation{Hubble Fellow}\n\
             \\affiliation{Vera C. Rubin Observatory, 950 N Cherry Ave, Tucson, AZ 85719, USA}\n\
             \\affiliation{Department of Astronomy, University of Washington, Seattle, WA 98195, USA}\n\
             \n"
        );
    }

    #[test]
    fn test_spie_output() {
        let fx = fixture("- asmith\n- pwong\n");
        let out = run(&fx, OutputMode::Spie, false).unwrap();

        assert_eq!(
            body(&out, OutputMode::Spie),
            "\\author[1 2]{~A.~B.~Smith~Jones}\n\
             \\affil[1]{Vera C. Rubin Observatory, 950 N Cherry Ave, Tucson, AZ 85719, USA}\n\
             \\affil[2]{Department of Astronomy, University of Washington, Seattle, WA 98195, USA}\n\
             \n\
             \\author[3 2]{~P.~Q.~Wong}\n\
             \\affil[3]{Kavli Institute, Stanford, CA 94305, USA}\n\
             \n"
        );
    }

    #[test]
    fn test_adass_output() {
        let fx = fixture("- jdoe\n- asmith\n- pwong\n");
        let out = run(&fx, OutputMode::Adass, false).unwrap();

        assert_eq!(
            body(&out, OutputMode::Adass),
            "\\author{J.~Doe,$^1$ A.~B.~Smith~Jones,$^1$ $^2$ and P.~Q.~Wong$^3$ $^2$}\n\
             \\affil{$^1$Vera C. Rubin Observatory, 950 N Cherry Ave, Tucson, AZ 85719, USA}\n\
             \\affil{$^2$Department of Astronomy, University of Washington, Seattle, WA 98195, USA}\n\
             \\affil{$^3$Kavli Institute, Stanford, CA 94305, USA}\n\
             \\paperauthor{J.~Doe}{jdoe@example.org}{0000-0002-0000-0001}{Vera C. Rubin Observatory}{}{Tucson}{AZ}{85719}{USA}\n\
             \\paperauthor{A.~B.~Smith~Jones}{asmith@example.org}{}{Vera C. Rubin Observatory}{}{Tucson}{AZ}{85719}{USA}\n\
             \\paperauthor{P.~Q.~Wong}{}{}{Kavli Institute}{}{Stanford}{CA}{94305}{USA}\n\
             % Yes they said to have these index commands commented out.\n\
             %\\aindex{Doe,~J.}\n\
             %\\aindex{Smith~Jones,~A.~B.}\n\
             %\\aindex{Wong,~P.~Q.}\n"
        );
    }

    #[test]
    fn test_arxiv_output() {
        let fx = fixture("- jdoe\n- asmith\n- pwong\n");
        let out = run(&fx, OutputMode::Arxiv, false).unwrap();

        assert_eq!(
            body(&out, OutputMode::Arxiv),
            "Authors:J. Doe(1) and A.~B. Smith~Jones(1) (2) and P.~Q. Wong(3) (2)\n\
             ((1) Vera C. Rubin Observatory, (2) Department of Astronomy, (3) Kavli Institute)\n\
             \n"
        );
    }

    #[test]
    fn test_arxiv_without_affiliations() {
        let fx = fixture("- jdoe\n- pwong\n");
        let out = run(&fx, OutputMode::Arxiv, true).unwrap();

        assert_eq!(
            out,
            format!(
                "{}Authors:J. Doe and P.~Q. Wong\n",
                generation_banner(OutputMode::Arxiv, true)
            )
        );
    }

    #[test]
    fn test_output_is_deterministic() {
        let fx = fixture("- pwong\n- jdoe\n- asmith\n");
        for mode in OutputMode::all() {
            let first = run(&fx, *mode, false).unwrap();
            let second = run(&fx, *mode, false).unwrap();
            assert_eq!(first, second, "mode {}", mode);
        }
    }
}

// =============================================================================
// Affiliation numbering
// =============================================================================

mod affiliation_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_shared_affiliation_reuses_index() {
        let db = AuthorDb::from_yaml_str(
            r#"
authors:
  a1: {name: First, initials: A., affil: [X]}
  a2: {name: Second, initials: B., affil: [X, Y]}
affiliations:
  X: Inst X, Country
  Y: Inst Y, Country
"#,
        )
        .unwrap();

        let cfg = OutputMode::Spie.config();
        let out = AuthorListRenderer::new(&cfg, &db)
            .render_to_string(&Roster::new(["a1", "a2"]))
            .unwrap();

        assert_eq!(
            out,
            "\\author[1]{~A.~First}\n\
             \\affil[1]{Inst X, Country}\n\
             \n\
             \\author[1 2]{~B.~Second}\n\
             \\affil[2]{Inst Y, Country}\n\
             \n"
        );
    }

    #[test]
    fn test_one_block_per_roster_entry() {
        let db = AuthorDb::from_yaml_str(AUTHOR_DB).unwrap();
        let roster = Roster::new(["jdoe", "asmith", "pwong", "jdoe"]);

        for mode in [OutputMode::Aas, OutputMode::Spie] {
            let cfg = mode.config();
            let out = AuthorListRenderer::new(&cfg, &db)
                .render_to_string(&roster)
                .unwrap();
            assert_eq!(out.matches("\\author").count(), roster.len(), "mode {}", mode);
        }

        let cfg = OutputMode::Adass.config();
        let mut sink = Vec::new();
        let summary = AuthorListRenderer::new(&cfg, &db)
            .render(&roster, &mut sink)
            .unwrap();
        assert_eq!(summary.authors, roster.len());
        assert_eq!(summary.affiliations, 3);
    }
}

// =============================================================================
// Failures
// =============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_unknown_author_names_the_id() {
        let fx = fixture("- jdoe\n- nobody\n");
        let err = run(&fx, OutputMode::Adass, false).unwrap_err();
        let root = err.downcast_ref::<AuthorListError>().unwrap();
        assert!(matches!(root, AuthorListError::UnknownAuthor(id) if id == "nobody"));
    }

    #[test]
    fn test_combined_mode_writes_nothing_on_failure() {
        let fx = fixture("- jdoe\n- nobody\n");
        let options = GenerateOptions {
            mode: OutputMode::Arxiv,
            no_affil: false,
            paths: fx.paths.clone(),
        };
        let mut out = Vec::new();
        assert!(generate(&options, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_roster_file() {
        let fx = fixture("- jdoe\n");
        let options = GenerateOptions {
            mode: OutputMode::Aas,
            no_affil: false,
            paths: InputPaths::resolve(
                Some(PathBuf::from("/nonexistent/authors.yaml")),
                Some(fx.paths.db.clone()),
            ),
        };
        let err = generate(&options, &mut Vec::new()).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/authors.yaml"));
    }

    #[test]
    fn test_malformed_roster() {
        let fx = fixture("- jdoe\n- [unbalanced\n");
        let err = run(&fx, OutputMode::Aas, false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AuthorListError>(),
            Some(AuthorListError::Parse { .. })
        ));
    }
}
