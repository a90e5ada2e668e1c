//! End-to-end conversion tests over a synthetic API reference page

use refdoc::pipeline::{convert_html, Emit, PageSource};
use refdoc::template_profile::TemplateProfile;

/// A trimmed-down class page in the target template family: header with
/// title, linked and unlinked annotations around the type signature, a
/// description block, and a three-column method summary table.
const CLASS_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head><title>GridFSBucket</title></head>
<body>
<main>
  <div class="header">
    <h1 title="GridFSBucket" class="title">Interface GridFSBucket</h1>
  </div>
  <section class="class-description">
    <div class="type-signature">
      <span class="annotations"><a href="ThreadSafe.html">@ThreadSafe</a></span>
      <span class="annotations">@Beta</span>
      <span class="modifiers">public interface </span>
      <span class="element-name">GridFSBucket</span>
    </div>
    <div class="block">Represents a GridFS bucket.</div>
  </section>
  <section class="summary">
    <section class="method-summary" id="method-summary">
      <h2>Method Summary</h2>
      <div id="method-summary-table">
        <div class="caption"><span>Instance Methods</span></div>
        <div class="summary-table three-column-summary">
          <div class="table-header col-first">Modifier and Type</div>
          <div class="table-header col-second">Method</div>
          <div class="table-header col-last">Description</div>
          <div class="col-first"><code>void</code></div>
          <div class="col-second"><code><a href="#delete(ObjectId)">delete</a></code></div>
          <div class="col-last">Deletes a stored file.</div>
          <div class="col-first"><code>String</code></div>
          <div class="col-second"><code><a href="#getBucketName()">getBucketName</a></code></div>
          <div class="col-last">The bucket name.</div>
        </div>
      </div>
    </section>
  </section>
</main>
</body>
</html>
"##;

#[test]
fn test_class_page_renders_to_markup() {
    let rendered = convert_html(CLASS_PAGE, &TemplateProfile::default(), Emit::Rst).unwrap();

    // Page title from the title attribute, underlined at full length
    assert!(rendered.starts_with("GridFSBucket\n============\n\n"));

    // The linked annotation becomes a reference, the unlinked one is skipped
    assert!(rendered.contains("`@ThreadSafe <ThreadSafe.html>`__\n\n"));
    assert!(!rendered.contains("@Beta <"));

    // Signature spans concatenate into one java code block
    assert!(rendered.contains(".. code:: java\n\n   public interface GridFSBucket\n\n"));

    // Description block renders as a paragraph
    assert!(rendered.contains("Represents a GridFS bucket.\n\n"));

    // Summary section: heading plus a list-table with three rows
    assert!(rendered.contains("Method Summary\n--------------\n\n"));
    assert!(rendered.contains(".. list-table::\n   :header-rows: 1\n"));
    assert_eq!(rendered.matches("* - ").count(), 3);
    assert!(rendered.contains("* - Modifier and Type\n     - Method\n     - Description\n"));
    assert!(rendered.contains("* - void\n     - delete\n     - Deletes a stored file.\n"));
    assert!(rendered.contains("* - String\n     - getBucketName\n     - The bucket name.\n"));

    // References precede the signature code block
    let reference_at = rendered.find("`@ThreadSafe").unwrap();
    let code_at = rendered.find(".. code:: java").unwrap();
    assert!(reference_at < code_at);
}

#[test]
fn test_class_page_emits_document_tree() {
    let json = convert_html(CLASS_PAGE, &TemplateProfile::default(), Emit::Ast).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["type"], "root");

    // Everything after the header nests under the section it opened
    let children = value["children"].as_array().unwrap();
    assert_eq!(children.len(), 1);
    let section = &children[0];
    assert_eq!(section["type"], "section");

    let section_children = section["children"].as_array().unwrap();
    assert_eq!(section_children[0]["type"], "heading");
    assert_eq!(
        section_children[0]["children"][0]["value"],
        "GridFSBucket"
    );

    // Reference paragraph, then the signature code block
    let types: Vec<&str> = section_children
        .iter()
        .map(|node| node["type"].as_str().unwrap())
        .collect();
    assert!(types.contains(&"paragraph"));
    assert!(types.contains(&"code"));

    let code = section_children
        .iter()
        .find(|node| node["type"] == "code")
        .unwrap();
    assert_eq!(code["lang"], "java");
    assert_eq!(code["value"], "public interface GridFSBucket");
    assert_eq!(code["copyable"], false);
}

#[test]
fn test_wider_summary_table_via_profile() {
    let mut profile = TemplateProfile::default();
    profile.summary_columns = 2;

    let html = "<main>\
                <section class=\"method-summary\">\
                <h2>Field Summary</h2>\
                <div id=\"field-summary-table\">\
                <div class=\"summary-table\">\
                <div>Field</div><div>Description</div>\
                <div>bucketName</div><div>The name.</div>\
                </div>\
                </div>\
                </section>\
                </main>";
    let rendered = convert_html(html, &profile, Emit::Rst).unwrap();

    assert_eq!(rendered.matches("* - ").count(), 2);
    assert!(rendered.contains("* - Field\n     - Description\n"));
}

#[test]
fn test_divergent_page_fails_loudly() {
    // Four columns of cells against the default three-column profile
    let html = "<main>\
                <section class=\"method-summary\">\
                <h2>Method Summary</h2>\
                <div id=\"t\">\
                <div class=\"summary-table\">\
                <div>a</div><div>b</div><div>c</div><div>d</div>\
                </div>\
                </div>\
                </section>\
                </main>";
    let result = convert_html(html, &TemplateProfile::default(), Emit::Rst);

    assert!(result.is_err());
}

#[test]
fn test_source_classification() {
    assert!(matches!(
        PageSource::classify("https://docs.example.com/5.2/apidocs/GridFSBucket.html"),
        PageSource::Url(_)
    ));
    assert!(matches!(
        PageSource::classify("fixtures/GridFSBucket.html"),
        PageSource::File(_)
    ));
}
