use std::path::Path;

use ds_bootstrap::models::ProjectLayout;
use ds_bootstrap::scaffold::Scaffolder;
use speculate2::speculate;

fn entries(path: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(path)
        .expect("Failed to list directory")
        .map(|e| e.expect("Failed to read entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

speculate! {
    before {
        let temp = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp.path();
        let scaffolder = Scaffolder::new(root, ProjectLayout::default());
    }

    describe "directories" {
        it "creates every manifest directory" {
            scaffolder.run().expect("Scaffold failed");

            for dir in [
                "data",
                "data/raw",
                "data/processed",
                "docs",
                "references",
                "reports",
                "notebooks",
                "saved_models",
                "src",
            ] {
                assert!(root.join(dir).is_dir(), "missing directory {}", dir);
            }
        }

        it "tolerates directories that already exist" {
            std::fs::create_dir_all(root.join("data/raw")).expect("Failed to pre-create");
            scaffolder.run().expect("Scaffold failed");
            assert!(root.join("data/raw").is_dir());
        }

        it "is idempotent across runs" {
            scaffolder.run().expect("First run failed");
            scaffolder.run().expect("Second run failed");
            assert!(root.join("data/processed").is_dir());
        }
    }

    describe "files" {
        it "creates every manifest file empty" {
            scaffolder.run().expect("Scaffold failed");

            for file in [
                "params.yaml",
                ".gitignore",
                "requirements.txt",
                "src/__init__.py",
                "notebooks/demo.ipynb",
            ] {
                let path = root.join(file);
                assert!(path.is_file(), "missing file {}", file);
                let len = std::fs::metadata(&path).expect("Failed to stat").len();
                assert_eq!(len, 0, "{} is not empty", file);
            }
        }

        it "truncates manifest files on re-run" {
            scaffolder.run().expect("First run failed");
            std::fs::write(root.join("params.yaml"), "model: xgboost\n")
                .expect("Failed to edit file");

            scaffolder.run().expect("Second run failed");

            let len = std::fs::metadata(root.join("params.yaml")).expect("Failed to stat").len();
            assert_eq!(len, 0);
        }
    }

    describe "markers" {
        it "marks every directory no manifest file landed in" {
            scaffolder.run().expect("Scaffold failed");

            for dir in ["docs", "references", "reports", "saved_models"] {
                assert_eq!(entries(&root.join(dir)), vec![".gitkeep"], "in {}", dir);
            }
        }

        it "skips directories that received a manifest file" {
            scaffolder.run().expect("Scaffold failed");

            assert!(!root.join("src/.gitkeep").exists());
            assert!(!root.join("notebooks/.gitkeep").exists());
        }

        it "skips data, which holds the raw and processed subdirectories" {
            scaffolder.run().expect("Scaffold failed");

            assert!(!root.join("data/.gitkeep").exists());
            assert_eq!(entries(&root.join("data/raw")), vec![".gitkeep"]);
            assert_eq!(entries(&root.join("data/processed")), vec![".gitkeep"]);
        }

        it "skips directories that already have unrelated content" {
            std::fs::create_dir_all(root.join("docs")).expect("Failed to pre-create");
            std::fs::write(root.join("docs/index.md"), "# Docs\n").expect("Failed to write");

            scaffolder.run().expect("Scaffold failed");

            assert!(!root.join("docs/.gitkeep").exists());
        }

        it "does not duplicate markers on re-run" {
            scaffolder.run().expect("First run failed");
            scaffolder.run().expect("Second run failed");

            assert_eq!(entries(&root.join("reports")), vec![".gitkeep"]);
        }
    }

    describe "report" {
        it "lists everything the run touched" {
            let report = scaffolder.run().expect("Scaffold failed");

            assert_eq!(report.directories.len(), 9);
            assert_eq!(report.files.len(), 5);
            assert_eq!(report.markers.len(), 4);
        }

        it "lists no markers once every directory is occupied" {
            scaffolder.run().expect("First run failed");
            let report = scaffolder.run().expect("Second run failed");

            assert!(report.markers.is_empty());
        }
    }
}
