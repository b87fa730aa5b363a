//! Terminal output

use std::io::{self, Write};

use tabled::{
    builder::Builder,
    settings::{
        Color, Style,
        object::{Columns, Rows},
    },
};

use catalog_app::{
    domain::products::models::Product,
    form::FormController,
    validation::Field,
};

/// Write `products` as a table, followed by how many of the matches are shown.
pub(crate) fn write_product_table(
    out: &mut impl Write,
    products: &[&Product],
    matching: usize,
) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Name", "Description", "Release", "Revision"]);

    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            product.description.clone(),
            product.date_release.to_string(),
            product.date_revision.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    writeln!(out, "{table}")?;
    writeln!(out, "{} of {matching} results", products.len())
}

/// Write every attribute of `product`, one per row.
pub(crate) fn write_product(out: &mut impl Write, product: &Product) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record([Field::Id.as_str(), product.id.as_str()]);
    builder.push_record([Field::Name.as_str(), product.name.as_str()]);
    builder.push_record([Field::Description.as_str(), product.description.as_str()]);
    builder.push_record([Field::Logo.as_str(), product.logo.as_str()]);
    builder.push_record([
        Field::DateRelease.as_str().to_string(),
        product.date_release.to_string(),
    ]);
    builder.push_record([
        Field::DateRevision.as_str().to_string(),
        product.date_revision.to_string(),
    ]);

    let mut table = builder.build();

    table.with(Style::rounded());
    table.modify(Columns::first(), Color::BOLD);

    writeln!(out, "{table}")
}

/// One line per visible field error, then one per form-level error.
pub(crate) fn write_validation_errors(
    out: &mut impl Write,
    form: &FormController,
) -> io::Result<()> {
    for field in Field::ALL {
        for reason in form.visible_errors(field).into_iter().flatten() {
            writeln!(out, "{field}: {reason}")?;
        }
    }

    for reason in form.state().form_errors() {
        writeln!(out, "{}: {reason}", Field::DateRevision)?;
    }

    Ok(())
}
