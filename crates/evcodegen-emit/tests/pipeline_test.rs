//! End-to-end tests: scan headers, render, write
//!
//! Uses header text shaped like the Linux uapi input headers.

use evcodegen_core::{GeneratorConfig, RenderOptions};
use evcodegen_emit::{render, write_artifacts};
use evcodegen_scanner::scan_headers;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const INPUT_EVENT_CODES: &str = r#"
#ifndef _UAPI_INPUT_EVENT_CODES_H
#define _UAPI_INPUT_EVENT_CODES_H

#define INPUT_PROP_POINTER		0x00	/* needs a pointer */
#define INPUT_PROP_DIRECT		0x01	/* direct input devices */

#define EV_SYN			0x00
#define EV_KEY			0x01
#define EV_ABS			0x03

#define SYN_REPORT		0
#define SYN_CONFIG		1

#define KEY_RESERVED		0
#define KEY_ESC			1
#define KEY_HANGEUL		122
#define KEY_HANGUEL		KEY_HANGEUL

#define BTN_MISC		0x100
#define BTN_0			0x100

#define KEY_MIN_INTERESTING	KEY_MUTE

#define ABS_X			0x00
#define ABS_MAX			0x3f
#define ABS_CNT			(ABS_MAX+1)

#endif
"#;

const INPUT_H: &str = r#"
#define EV_VERSION		0x010001
#define ID_BUS			0
#define ID_VENDOR		1
#define BUS_USB			0x03
#define FF_RUMBLE	0x50
#define KEY_ESC			99
"#;

const UINPUT_H: &str = r#"
#define UI_FF_UPLOAD		1
#define UI_FF_ERASE		2
#define EV_UINPUT		0x0101
"#;

struct Fixture {
    temp: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("input.h"), INPUT_H).unwrap();
        fs::write(temp.path().join("input-event-codes.h"), INPUT_EVENT_CODES).unwrap();
        fs::write(temp.path().join("uinput.h"), UINPUT_H).unwrap();
        Self { temp }
    }

    fn header(&self, name: &str) -> std::path::PathBuf {
        self.temp.path().join(name)
    }

    fn generate(&self, headers: &[std::path::PathBuf]) -> (String, String) {
        let (registry, _) = scan_headers(headers, &GeneratorConfig::default()).unwrap();
        let decl = self.temp.path().join("out/ecodes.h");
        let def = self.temp.path().join("out/ecodes.cc");
        let artifacts = render(&registry, &RenderOptions::default(), &decl);
        write_artifacts(&artifacts, &decl, &def).unwrap();
        (
            fs::read_to_string(decl).unwrap(),
            fs::read_to_string(def).unwrap(),
        )
    }
}

#[test]
fn test_generates_members_from_all_headers() {
    let fixture = Fixture::new();
    let (decl, def) = fixture.generate(&[
        fixture.header("input.h"),
        fixture.header("input-event-codes.h"),
        fixture.header("uinput.h"),
    ]);

    assert!(decl.starts_with("// Automatically generated by evcodegen. DO NOT EDIT.\n"));
    assert!(def.starts_with("// Automatically generated by evcodegen. DO NOT EDIT.\n"));
    assert!(def.contains("#include \"evdevpp/ecodes.h\"\n"));

    assert!(decl.contains("  static const Key kEsc;\n"));
    assert!(decl.contains("  static const UIForceFeedback kUpload;\n"));
    assert!(decl.contains("  static const Property kPointer;\n"));
    assert!(def.contains("const EventType EventType::kUinput = 0x0101;\n"));
    assert!(def.contains("const ID ID::kVendor = 1;\n"));

    // input.h comes first, so its KEY_ESC wins.
    assert!(def.contains("const Key Key::kEsc = 99;\n"));
    assert!(!def.contains("const Key Key::kEsc = 1;"));
    assert_eq!(def.matches("result.try_emplace(kEsc, \"Key::kEsc\");").count(), 1);
}

#[test]
fn test_aliases_and_rejected_lines() {
    let fixture = Fixture::new();
    let (decl, def) = fixture.generate(&[fixture.header("input-event-codes.h")]);

    assert!(def.contains("const Key Key::kHanguel = Key::kHangeul;\n"));
    assert!(def.contains("const Key Key::kMinInteresting = Key::kMute;\n"));
    assert!(!def.contains("try_emplace(kHanguel"));
    assert!(!def.contains("try_emplace(kMinInteresting"));
    assert!(!decl.contains("kCnt"));
}

#[test]
fn test_ev_version_is_excluded() {
    let fixture = Fixture::new();
    let (decl, def) = fixture.generate(&[fixture.header("input.h")]);

    assert!(!decl.contains("kVersion"));
    assert!(!def.contains("0x010001"));
}

#[test]
fn test_missing_headers_still_produce_complete_files() {
    let fixture = Fixture::new();
    let (decl, def) = fixture.generate(&[
        fixture.header("missing.h"),
        fixture.header("uinput.h"),
        fixture.header("also-missing.h"),
    ]);

    assert!(decl.contains("  static const UIForceFeedback kErase;\n"));
    assert!(def.contains("const UIForceFeedback UIForceFeedback::kErase = 2;\n"));
    for type_name in ["Key", "AbsoluteAxis", "Switch", "Synch", "Property"] {
        assert!(decl.contains(&format!("struct {type_name} {{\n")), "{type_name}");
    }
}

#[test]
fn test_no_readable_headers() {
    let fixture = Fixture::new();
    let (decl, def) = fixture.generate(&[fixture.header("missing.h")]);

    assert_eq!(decl.matches("return \"UNKNOWN\";").count(), 16);
    assert_eq!(def.matches("::CodeToString() {").count(), 16);
    assert!(!decl.contains("static const Key k"));
    assert!(!def.contains("try_emplace"));
}

#[test]
fn test_regeneration_is_byte_identical() {
    let fixture = Fixture::new();
    let headers = [
        fixture.header("input.h"),
        fixture.header("input-event-codes.h"),
        fixture.header("uinput.h"),
    ];

    let first = fixture.generate(&headers);
    let second = fixture.generate(&headers);
    assert_eq!(first, second);
}
