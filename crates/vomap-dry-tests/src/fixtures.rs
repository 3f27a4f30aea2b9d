// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! Annotated sample documents.
//!
//! Every fixture is a complete VOTable annotated against the models in
//! `vomap-models`. Tests read them through [`crate::ReaderTestBuilder`].

/// Two coordinates sharing frame `F1` (by `IDREF`), plus an unreferenced
/// frame `F2`.
pub const SHARED_FRAME: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<VOTABLE xmlns="http://www.ivoa.net/xml/VOTable/v1.4" version="1.4">
  <VODML>
    <GLOBALS>
      <INSTANCE dmtype="sample:catalog.SkyCoordinateFrame" ID="F1">
        <ATTRIBUTE dmrole="sample:catalog.SkyCoordinateFrame.name">
          <LITERAL dmtype="ivoa:string" value="ICRS"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:catalog.SkyCoordinateFrame.documentURI">
          <LITERAL dmtype="ivoa:anyURI" value="http://www.iers.org/IERS/EN/Science/ICRS/ICRS.html"/>
        </ATTRIBUTE>
      </INSTANCE>
      <INSTANCE dmtype="sample:catalog.SkyCoordinateFrame" ID="F2">
        <ATTRIBUTE dmrole="sample:catalog.SkyCoordinateFrame.name">
          <LITERAL dmtype="ivoa:string" value="FK5"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:catalog.SkyCoordinateFrame.equinox">
          <LITERAL dmtype="ivoa:string" value="J2000.0"/>
        </ATTRIBUTE>
      </INSTANCE>
      <INSTANCE dmtype="sample:catalog.SkyCoordinate" ID="c1">
        <ATTRIBUTE dmrole="sample:catalog.SkyCoordinate.longitude">
          <LITERAL dmtype="ivoa:RealQuantity" value="10.0" unit="deg"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:catalog.SkyCoordinate.latitude">
          <LITERAL dmtype="ivoa:RealQuantity" value="20.0" unit="deg"/>
        </ATTRIBUTE>
        <REFERENCE dmrole="sample:catalog.SkyCoordinate.frame">
          <IDREF>F1</IDREF>
        </REFERENCE>
      </INSTANCE>
      <INSTANCE dmtype="sample:catalog.SkyCoordinate" ID="c2">
        <ATTRIBUTE dmrole="sample:catalog.SkyCoordinate.longitude">
          <LITERAL dmtype="ivoa:RealQuantity" value="11.0" unit="deg"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:catalog.SkyCoordinate.latitude">
          <LITERAL dmtype="ivoa:RealQuantity" value="21.0" unit="deg"/>
        </ATTRIBUTE>
        <REFERENCE dmrole="sample:catalog.SkyCoordinate.frame">
          <IDREF>F1</IDREF>
        </REFERENCE>
      </INSTANCE>
    </GLOBALS>
  </VODML>
</VOTABLE>
"#;

/// One coordinate whose frame reference names no element, followed by a
/// well-formed coordinate.
pub const DANGLING_FRAME: &str = r#"<VOTABLE>
  <VODML>
    <GLOBALS>
      <INSTANCE dmtype="sample:catalog.SkyCoordinate" ID="lost">
        <ATTRIBUTE dmrole="sample:catalog.SkyCoordinate.longitude">
          <LITERAL dmtype="ivoa:RealQuantity" value="1.5" unit="deg"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:catalog.SkyCoordinate.latitude">
          <LITERAL dmtype="ivoa:RealQuantity" value="2.5" unit="deg"/>
        </ATTRIBUTE>
        <REFERENCE dmrole="sample:catalog.SkyCoordinate.frame">
          <IDREF>no-such-frame</IDREF>
        </REFERENCE>
      </INSTANCE>
      <INSTANCE dmtype="sample:catalog.SkyCoordinate" ID="found">
        <ATTRIBUTE dmrole="sample:catalog.SkyCoordinate.longitude">
          <LITERAL dmtype="ivoa:RealQuantity" value="3.5" unit="deg"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:catalog.SkyCoordinate.latitude">
          <LITERAL dmtype="ivoa:RealQuantity" value="4.5" unit="deg"/>
        </ATTRIBUTE>
        <REFERENCE dmrole="sample:catalog.SkyCoordinate.frame">
          <IDREF>icrs</IDREF>
        </REFERENCE>
      </INSTANCE>
      <INSTANCE dmtype="sample:catalog.SkyCoordinateFrame" ID="icrs">
        <ATTRIBUTE dmrole="sample:catalog.SkyCoordinateFrame.name">
          <LITERAL dmtype="ivoa:string" value="ICRS"/>
        </ATTRIBUTE>
      </INSTANCE>
    </GLOBALS>
  </VODML>
</VOTABLE>
"#;

/// A column-backed coordinate (`pos`) over a three-row table.
pub const POSITIONS: &str = r#"<VOTABLE>
  <VODML>
    <GLOBALS>
      <INSTANCE dmtype="sample:catalog.SkyCoordinateFrame" ID="icrs">
        <ATTRIBUTE dmrole="sample:catalog.SkyCoordinateFrame.name">
          <LITERAL dmtype="ivoa:string" value="ICRS"/>
        </ATTRIBUTE>
      </INSTANCE>
    </GLOBALS>
    <TEMPLATES tableref="_positions">
      <INSTANCE dmtype="sample:catalog.SkyCoordinate" ID="pos">
        <ATTRIBUTE dmrole="sample:catalog.SkyCoordinate.longitude">
          <COLUMN dmtype="ivoa:RealQuantity" ref="_ra"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:catalog.SkyCoordinate.latitude">
          <COLUMN dmtype="ivoa:RealQuantity" ref="_dec"/>
        </ATTRIBUTE>
        <REFERENCE dmrole="sample:catalog.SkyCoordinate.frame">
          <IDREF>icrs</IDREF>
        </REFERENCE>
      </INSTANCE>
    </TEMPLATES>
  </VODML>
  <RESOURCE>
    <TABLE ID="_positions" name="positions">
      <FIELD ID="_ra" name="ra" datatype="double" unit="deg"/>
      <FIELD ID="_dec" name="dec" datatype="double" unit="deg"/>
      <DATA>
        <TABLEDATA>
          <TR><TD>123.0337</TD><TD>-2.1037</TD></TR>
          <TR><TD>150.9319</TD><TD>-31.6403</TD></TR>
          <TR><TD>200.5</TD><TD>45.25</TD></TR>
        </TABLEDATA>
      </DATA>
    </TABLE>
  </RESOURCE>
</VOTABLE>
"#;

/// Source catalog with luminosity batches joined back to their sources by
/// foreign key, and filters joined to luminosities by foreign key.
///
/// Source `08120809-0206132` has two luminosities (H and K), source
/// `10034365-3138252` has one (H).
pub const CATALOG: &str = r#"<VOTABLE>
  <VODML>
    <GLOBALS>
      <INSTANCE dmtype="sample:catalog.SkyCoordinateFrame" ID="_icrs">
        <ATTRIBUTE dmrole="sample:catalog.SkyCoordinateFrame.name">
          <LITERAL dmtype="ivoa:string" value="ICRS"/>
        </ATTRIBUTE>
      </INSTANCE>
    </GLOBALS>
    <GLOBALS ID="_filters">
      <INSTANCE dmtype="photdm-alt:PhotometryFilter" ID="_2mass_h">
        <PRIMARYKEY>
          <PKFIELD><LITERAL dmtype="ivoa:string" value="H"/></PKFIELD>
        </PRIMARYKEY>
        <ATTRIBUTE dmrole="name"><LITERAL dmtype="ivoa:string" value="2mass:H"/></ATTRIBUTE>
        <ATTRIBUTE dmrole="bandName"><LITERAL dmtype="ivoa:string" value="H"/></ATTRIBUTE>
        <ATTRIBUTE dmrole="spectralLocation">
          <LITERAL dmtype="ivoa:RealQuantity" value="1.662" unit="um"/>
        </ATTRIBUTE>
      </INSTANCE>
      <INSTANCE dmtype="photdm-alt:PhotometryFilter" ID="_2mass_k">
        <PRIMARYKEY>
          <PKFIELD><LITERAL dmtype="ivoa:string" value="K"/></PKFIELD>
        </PRIMARYKEY>
        <ATTRIBUTE dmrole="name"><LITERAL dmtype="ivoa:string" value="2mass:K"/></ATTRIBUTE>
        <ATTRIBUTE dmrole="bandName"><LITERAL dmtype="ivoa:string" value="K"/></ATTRIBUTE>
        <ATTRIBUTE dmrole="spectralLocation">
          <LITERAL dmtype="ivoa:RealQuantity" value="2.159" unit="um"/>
        </ATTRIBUTE>
      </INSTANCE>
    </GLOBALS>
    <TEMPLATES tableref="_sources">
      <INSTANCE dmtype="sample:catalog.SDSSSource" ID="_source">
        <PRIMARYKEY>
          <PKFIELD><COLUMN dmtype="ivoa:string" ref="_designation"/></PKFIELD>
        </PRIMARYKEY>
        <ATTRIBUTE dmrole="sample:catalog.AbstractSource.name">
          <COLUMN dmtype="ivoa:string" ref="_designation"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:catalog.AbstractSource.classification">
          <LITERAL dmtype="sample:catalog.SourceClassification" value="star"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:catalog.AbstractSource.position">
          <INSTANCE dmtype="sample:catalog.SkyCoordinate">
            <ATTRIBUTE dmrole="sample:catalog.SkyCoordinate.longitude">
              <COLUMN dmtype="ivoa:RealQuantity" ref="_ra"/>
            </ATTRIBUTE>
            <ATTRIBUTE dmrole="sample:catalog.SkyCoordinate.latitude">
              <COLUMN dmtype="ivoa:RealQuantity" ref="_dec"/>
            </ATTRIBUTE>
            <REFERENCE dmrole="sample:catalog.SkyCoordinate.frame">
              <IDREF>_icrs</IDREF>
            </REFERENCE>
          </INSTANCE>
        </ATTRIBUTE>
        <COMPOSITION dmrole="sample:catalog.AbstractSource.luminosity">
          <EXTINSTANCES>_luminosity</EXTINSTANCES>
        </COMPOSITION>
      </INSTANCE>
    </TEMPLATES>
    <TEMPLATES tableref="_luminosities">
      <INSTANCE dmtype="sample:catalog.LuminosityMeasurement" ID="_luminosity">
        <CONTAINER>
          <FOREIGNKEY>
            <PKFIELD><COLUMN dmtype="ivoa:string" ref="_lum_source"/></PKFIELD>
            <TARGETID>_source</TARGETID>
          </FOREIGNKEY>
        </CONTAINER>
        <ATTRIBUTE dmrole="sample:catalog.LuminosityMeasurement.value">
          <COLUMN dmtype="ivoa:RealQuantity" ref="_mag"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:catalog.LuminosityMeasurement.type">
          <LITERAL dmtype="sample:catalog.LuminosityType" value="magnitude"/>
        </ATTRIBUTE>
        <REFERENCE dmrole="sample:catalog.LuminosityMeasurement.filter">
          <FOREIGNKEY>
            <PKFIELD><COLUMN dmtype="ivoa:string" ref="_band"/></PKFIELD>
            <TARGETID>_filters</TARGETID>
          </FOREIGNKEY>
        </REFERENCE>
      </INSTANCE>
    </TEMPLATES>
  </VODML>
  <RESOURCE>
    <TABLE ID="_sources" name="sources">
      <FIELD ID="_designation" name="designation" datatype="char" arraysize="*"/>
      <FIELD ID="_ra" name="ra" datatype="double" unit="deg"/>
      <FIELD ID="_dec" name="dec" datatype="double" unit="deg"/>
      <DATA>
        <TABLEDATA>
          <TR><TD>08120809-0206132</TD><TD>123.0337</TD><TD>-2.1037</TD></TR>
          <TR><TD>10034365-3138252</TD><TD>150.9319</TD><TD>-31.6403</TD></TR>
        </TABLEDATA>
      </DATA>
    </TABLE>
    <TABLE ID="_luminosities" name="luminosities">
      <FIELD ID="_lum_source" name="source" datatype="char" arraysize="*"/>
      <FIELD ID="_band" name="band" datatype="char" arraysize="*"/>
      <FIELD ID="_mag" name="mag" datatype="double" unit="mag"/>
      <DATA>
        <TABLEDATA>
          <TR><TD>08120809-0206132</TD><TD>H</TD><TD>15.718</TD></TR>
          <TR><TD>08120809-0206132</TD><TD>K</TD><TD>14.959</TD></TR>
          <TR><TD>10034365-3138252</TD><TD>H</TD><TD>12.5</TD></TR>
        </TABLEDATA>
      </DATA>
    </TABLE>
  </RESOURCE>
</VOTABLE>
"#;

/// Literal, constant and malformed values of every `ivoa` primitive, plus
/// a `MultiObj` with a two-valued attribute.
pub const VALUES: &str = r#"<VOTABLE>
  <RESOURCE>
    <PARAM ID="_scale" name="scale" datatype="double" value="1.75"/>
    <PARAM ID="_distance" name="distance" datatype="double" value="42.5" unit="pc"/>
  </RESOURCE>
  <VODML>
    <GLOBALS>
      <INSTANCE dmtype="sample:test.BaseTypeElements" ID="all">
        <ATTRIBUTE dmrole="sample:test.BaseTypeElements.sval">
          <LITERAL dmtype="ivoa:string" value="some text"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:test.BaseTypeElements.unit">
          <LITERAL dmtype="ivoa:Unit" value="km/s"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:test.BaseTypeElements.link">
          <LITERAL dmtype="ivoa:anyURI" value="http://example.org/vo"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:test.BaseTypeElements.qval">
          <LITERAL dmtype="ivoa:boolean" value="True"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:test.BaseTypeElements.tval">
          <LITERAL dmtype="ivoa:datetime" value="2011-06-20T16:45:00"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:test.BaseTypeElements.ival">
          <LITERAL dmtype="ivoa:integer" value="-7"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:test.BaseTypeElements.wval">
          <LITERAL dmtype="ivoa:nonnegativeInteger" value="12"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:test.BaseTypeElements.rval">
          <CONSTANT dmtype="ivoa:real" ref="_scale"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:test.BaseTypeElements.iqty">
          <LITERAL dmtype="ivoa:IntegerQuantity" value="3" unit="m"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:test.BaseTypeElements.rqty">
          <CONSTANT dmtype="ivoa:RealQuantity" ref="_distance"/>
        </ATTRIBUTE>
      </INSTANCE>
      <INSTANCE dmtype="sample:test.BaseTypeElements" ID="broken">
        <ATTRIBUTE dmrole="sample:test.BaseTypeElements.ival">
          <LITERAL dmtype="ivoa:integer" value="twelve"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:test.BaseTypeElements.wval">
          <LITERAL dmtype="ivoa:nonnegativeInteger" value="-1"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:test.BaseTypeElements.rval">
          <CONSTANT dmtype="ivoa:real" ref="_no_such_param"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:test.BaseTypeElements.rqty">
          <COLUMN dmtype="ivoa:RealQuantity" ref="_no_such_field"/>
        </ATTRIBUTE>
      </INSTANCE>
      <INSTANCE dmtype="sample:test.MultiObj" ID="multi">
        <ATTRIBUTE dmrole="sample:test.MultiObj.a">
          <LITERAL dmtype="ivoa:real" value="1.5"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:test.MultiObj.b">
          <LITERAL dmtype="ivoa:real" value="2.5"/>
          <CONSTANT dmtype="ivoa:real" ref="_scale"/>
        </ATTRIBUTE>
      </INSTANCE>
      <INSTANCE dmtype="sample:test.MultiObj" ID="sparse"/>
    </GLOBALS>
  </VODML>
</VOTABLE>
"#;

/// Photometry: a system composing two filters, and a calibration whose
/// zero point is a subclass instance and whose filter is a reference.
pub const PHOTOMETRY: &str = r#"<VOTABLE>
  <VODML>
    <GLOBALS>
      <INSTANCE dmtype="photdm-alt:PhotometricSystem" ID="_system">
        <ATTRIBUTE dmrole="detectorType">
          <LITERAL dmtype="ivoa:integer" value="1"/>
        </ATTRIBUTE>
        <COMPOSITION dmrole="photometryFilter">
          <INSTANCE dmtype="photdm-alt:PhotometryFilter" ID="_j">
            <ATTRIBUTE dmrole="bandName"><LITERAL dmtype="ivoa:string" value="J"/></ATTRIBUTE>
          </INSTANCE>
          <INSTANCE dmtype="photdm-alt:PhotometryFilter" ID="_h">
            <ATTRIBUTE dmrole="bandName"><LITERAL dmtype="ivoa:string" value="H"/></ATTRIBUTE>
          </INSTANCE>
        </COMPOSITION>
      </INSTANCE>
      <INSTANCE dmtype="photdm-alt:PhotCal" ID="_cal">
        <COMPOSITION dmrole="zeroPoint">
          <INSTANCE dmtype="photdm-alt:PogsonZeroPoint">
            <ATTRIBUTE dmrole="flux">
              <LITERAL dmtype="ivoa:RealQuantity" value="1594.0" unit="Jy"/>
            </ATTRIBUTE>
            <ATTRIBUTE dmrole="referenceMagnitude">
              <LITERAL dmtype="ivoa:RealQuantity" value="0.0" unit="mag"/>
            </ATTRIBUTE>
          </INSTANCE>
        </COMPOSITION>
        <REFERENCE dmrole="photometryFilter">
          <IDREF>_j</IDREF>
        </REFERENCE>
      </INSTANCE>
    </GLOBALS>
  </VODML>
</VOTABLE>
"#;

/// `coords:Point` instances: FK5 with explicit equinox, one without a frame,
/// one in a cartesian space, and a column-backed template.
pub const COORDS: &str = r#"<VOTABLE>
  <VODML>
    <GLOBALS>
      <INSTANCE dmtype="coords:PhysicalCoordSys" ID="_fk5_sys">
        <COMPOSITION dmrole="coords:PhysicalCoordSys.frame">
          <INSTANCE dmtype="coords:SpaceFrame">
            <ATTRIBUTE dmrole="coords:SpaceFrame.refPosition">
              <INSTANCE dmtype="coords:StdRefLocation">
                <ATTRIBUTE dmrole="coords:StdRefLocation.position">
                  <LITERAL dmtype="ivoa:string" value="BARYCENTER"/>
                </ATTRIBUTE>
              </INSTANCE>
            </ATTRIBUTE>
            <ATTRIBUTE dmrole="coords:SpaceFrame.spaceRefFrame">
              <LITERAL dmtype="ivoa:string" value="FK5"/>
            </ATTRIBUTE>
            <ATTRIBUTE dmrole="coords:SpaceFrame.equinox">
              <LITERAL dmtype="coords:Epoch" value="J1975"/>
            </ATTRIBUTE>
          </INSTANCE>
        </COMPOSITION>
      </INSTANCE>
      <INSTANCE dmtype="coords:PhysicalCoordSys" ID="_icrs_cart">
        <COMPOSITION dmrole="coords:PhysicalCoordSys.coordSpace">
          <INSTANCE dmtype="coords:CartesianCoordSpace"/>
        </COMPOSITION>
        <COMPOSITION dmrole="coords:PhysicalCoordSys.frame">
          <INSTANCE dmtype="coords:SpaceFrame">
            <ATTRIBUTE dmrole="coords:SpaceFrame.spaceRefFrame">
              <LITERAL dmtype="ivoa:string" value="ICRS"/>
            </ATTRIBUTE>
          </INSTANCE>
        </COMPOSITION>
      </INSTANCE>
      <INSTANCE dmtype="coords:PhysicalCoordSys" ID="_chip">
        <COMPOSITION dmrole="coords:PhysicalCoordSys.coordSpace">
          <INSTANCE dmtype="coords:CartesianCoordSpace"/>
        </COMPOSITION>
      </INSTANCE>
      <INSTANCE dmtype="coords:Point" ID="_fk5_point">
        <ATTRIBUTE dmrole="coords:Point.axis1">
          <LITERAL dmtype="ivoa:RealQuantity" value="10.342" unit="deg"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="coords:Point.axis2">
          <LITERAL dmtype="ivoa:RealQuantity" value="41.132" unit="deg"/>
        </ATTRIBUTE>
        <REFERENCE dmrole="coords:Coordinate.coordSys"><IDREF>_fk5_sys</IDREF></REFERENCE>
      </INSTANCE>
      <INSTANCE dmtype="coords:Point" ID="_cart_point">
        <ATTRIBUTE dmrole="coords:Point.axis1">
          <LITERAL dmtype="ivoa:RealQuantity" value="2.9" unit="lyr"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="coords:Point.axis2">
          <LITERAL dmtype="ivoa:RealQuantity" value="-3.0" unit="lyr"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="coords:Point.axis3">
          <LITERAL dmtype="ivoa:RealQuantity" value="-0.1" unit="lyr"/>
        </ATTRIBUTE>
        <REFERENCE dmrole="coords:Coordinate.coordSys"><IDREF>_icrs_cart</IDREF></REFERENCE>
      </INSTANCE>
      <INSTANCE dmtype="coords:Point" ID="_chip_point">
        <ATTRIBUTE dmrole="coords:Point.axis1">
          <LITERAL dmtype="ivoa:RealQuantity" value="300.5" unit="pixel"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="coords:Point.axis2">
          <LITERAL dmtype="ivoa:RealQuantity" value="500.0" unit="pixel"/>
        </ATTRIBUTE>
        <REFERENCE dmrole="coords:Coordinate.coordSys"><IDREF>_chip</IDREF></REFERENCE>
      </INSTANCE>
    </GLOBALS>
    <TEMPLATES>
      <INSTANCE dmtype="coords:Point" ID="_column_point">
        <ATTRIBUTE dmrole="coords:Point.axis1">
          <COLUMN dmtype="ivoa:RealQuantity" ref="_ra"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="coords:Point.axis2">
          <COLUMN dmtype="ivoa:RealQuantity" ref="_dec"/>
        </ATTRIBUTE>
        <REFERENCE dmrole="coords:Coordinate.coordSys"><IDREF>_fk5_sys</IDREF></REFERENCE>
      </INSTANCE>
    </TEMPLATES>
  </VODML>
  <RESOURCE>
    <TABLE>
      <FIELD ID="_ra" name="ra" datatype="double" unit="deg"/>
      <FIELD ID="_dec" name="dec" datatype="double" unit="deg"/>
      <DATA>
        <TABLEDATA>
          <TR><TD>10.0</TD><TD>11.0</TD></TR>
          <TR><TD>20.0</TD><TD>21.0</TD></TR>
        </TABLEDATA>
      </DATA>
    </TABLE>
  </RESOURCE>
</VOTABLE>
"#;

/// A frame whose `name` role is tagged twice; the first tag wins.
pub const DUPLICATE_ROLE: &str = r#"<VOTABLE>
  <VODML>
    <GLOBALS>
      <INSTANCE dmtype="sample:catalog.SkyCoordinateFrame" ID="twice">
        <ATTRIBUTE dmrole="sample:catalog.SkyCoordinateFrame.name">
          <LITERAL dmtype="ivoa:string" value="ICRS"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:catalog.SkyCoordinateFrame.name">
          <LITERAL dmtype="ivoa:string" value="FK4"/>
        </ATTRIBUTE>
      </INSTANCE>
    </GLOBALS>
  </VODML>
</VOTABLE>
"#;

/// Coordinates whose `frame` references point back into the graph: `self`
/// names itself, `ping` and `pong` name each other.
pub const CYCLES: &str = r#"<VOTABLE>
  <VODML>
    <GLOBALS>
      <INSTANCE dmtype="sample:catalog.SkyCoordinate" ID="self">
        <ATTRIBUTE dmrole="sample:catalog.SkyCoordinate.longitude">
          <LITERAL dmtype="ivoa:RealQuantity" value="1.0" unit="deg"/>
        </ATTRIBUTE>
        <REFERENCE dmrole="sample:catalog.SkyCoordinate.frame">
          <IDREF>self</IDREF>
        </REFERENCE>
      </INSTANCE>
      <INSTANCE dmtype="sample:catalog.SkyCoordinate" ID="ping">
        <REFERENCE dmrole="sample:catalog.SkyCoordinate.frame">
          <IDREF>pong</IDREF>
        </REFERENCE>
      </INSTANCE>
      <INSTANCE dmtype="sample:catalog.SkyCoordinate" ID="pong">
        <REFERENCE dmrole="sample:catalog.SkyCoordinate.frame">
          <IDREF>ping</IDREF>
        </REFERENCE>
      </INSTANCE>
    </GLOBALS>
  </VODML>
</VOTABLE>
"#;

/// A source whose nested position carries an unregistered type and whose
/// nested error carries no type at all; its other fields are well formed.
pub const NESTED_SCHEMA_ERRORS: &str = r#"<VOTABLE>
  <VODML>
    <GLOBALS>
      <INSTANCE dmtype="sample:catalog.Source" ID="partial">
        <ATTRIBUTE dmrole="sample:catalog.AbstractSource.name">
          <LITERAL dmtype="ivoa:string" value="ok"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:catalog.AbstractSource.position">
          <INSTANCE dmtype="nope:Thing"/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:catalog.AbstractSource.positionError">
          <INSTANCE/>
        </ATTRIBUTE>
        <ATTRIBUTE dmrole="sample:catalog.AbstractSource.classification">
          <LITERAL dmtype="sample:catalog.SourceClassification" value="star"/>
        </ATTRIBUTE>
      </INSTANCE>
    </GLOBALS>
  </VODML>
</VOTABLE>
"#;

/// A source whose luminosity batch names a scalar (non-template) instance.
pub const SCALAR_BATCH: &str = r#"<VOTABLE>
  <VODML>
    <GLOBALS>
      <INSTANCE dmtype="sample:catalog.Source" ID="lonely">
        <ATTRIBUTE dmrole="sample:catalog.AbstractSource.name">
          <LITERAL dmtype="ivoa:string" value="lonely"/>
        </ATTRIBUTE>
        <COMPOSITION dmrole="sample:catalog.AbstractSource.luminosity">
          <EXTINSTANCES>_single</EXTINSTANCES>
        </COMPOSITION>
      </INSTANCE>
      <INSTANCE dmtype="sample:catalog.LuminosityMeasurement" ID="_single">
        <ATTRIBUTE dmrole="sample:catalog.LuminosityMeasurement.value">
          <LITERAL dmtype="ivoa:RealQuantity" value="15.5" unit="mag"/>
        </ATTRIBUTE>
      </INSTANCE>
    </GLOBALS>
  </VODML>
</VOTABLE>
"#;

/// `meas` measures: MJD, ISO and offset times, a position with an ellipse
/// and a short bounds error, and a time template over a JD and ISO table.
pub const MEASUREMENTS: &str = r#"<VOTABLE>
  <VODML>
    <GLOBALS>
      <INSTANCE dmtype="coords:PhysicalCoordSys" ID="_tdb_sys">
        <COMPOSITION dmrole="coords:PhysicalCoordSys.frame">
          <INSTANCE dmtype="coords:TimeFrame">
            <ATTRIBUTE dmrole="coords:TimeFrame.timescale">
              <LITERAL dmtype="ivoa:string" value="TDB"/>
            </ATTRIBUTE>
          </INSTANCE>
        </COMPOSITION>
      </INSTANCE>
      <INSTANCE dmtype="coords:PhysicalCoordSys" ID="_bare_sys"/>
      <INSTANCE dmtype="meas:Time" ID="_epoch">
        <ATTRIBUTE dmrole="meas:Time.coord">
          <INSTANCE dmtype="coords:MJD">
            <ATTRIBUTE dmrole="coords:MJD.date">
              <LITERAL dmtype="ivoa:real" value="58000.5"/>
            </ATTRIBUTE>
            <REFERENCE dmrole="coords:Coordinate.coordSys"><IDREF>_tdb_sys</IDREF></REFERENCE>
          </INSTANCE>
        </ATTRIBUTE>
      </INSTANCE>
      <INSTANCE dmtype="meas:Time" ID="_launch">
        <ATTRIBUTE dmrole="meas:Time.coord">
          <INSTANCE dmtype="coords:ISOTime">
            <ATTRIBUTE dmrole="coords:ISOTime.date">
              <LITERAL dmtype="ivoa:datetime" value="2009-03-07T03:49:57"/>
            </ATTRIBUTE>
          </INSTANCE>
        </ATTRIBUTE>
      </INSTANCE>
      <INSTANCE dmtype="meas:Time" ID="_offset">
        <ATTRIBUTE dmrole="meas:Time.coord">
          <INSTANCE dmtype="coords:TimeOffset">
            <ATTRIBUTE dmrole="coords:TimeOffset.time">
              <LITERAL dmtype="ivoa:RealQuantity" value="120" unit="s"/>
            </ATTRIBUTE>
            <ATTRIBUTE dmrole="coords:TimeOffset.time0">
              <INSTANCE dmtype="coords:MJD">
                <ATTRIBUTE dmrole="coords:MJD.date">
                  <LITERAL dmtype="ivoa:real" value="50000"/>
                </ATTRIBUTE>
              </INSTANCE>
            </ATTRIBUTE>
          </INSTANCE>
        </ATTRIBUTE>
      </INSTANCE>
      <INSTANCE dmtype="meas:Position" ID="_target">
        <ATTRIBUTE dmrole="meas:Position.coord">
          <INSTANCE dmtype="coords:Point">
            <ATTRIBUTE dmrole="coords:Point.axis1">
              <LITERAL dmtype="ivoa:RealQuantity" value="83.8" unit="deg"/>
            </ATTRIBUTE>
            <ATTRIBUTE dmrole="coords:Point.axis2">
              <LITERAL dmtype="ivoa:RealQuantity" value="-5.4" unit="deg"/>
            </ATTRIBUTE>
          </INSTANCE>
        </ATTRIBUTE>
        <COMPOSITION dmrole="meas:Measure.error">
          <INSTANCE dmtype="meas:Error">
            <ATTRIBUTE dmrole="meas:Error.statError">
              <INSTANCE dmtype="meas:Ellipse">
                <ATTRIBUTE dmrole="meas:Ellipse.semiAxis">
                  <LITERAL dmtype="ivoa:RealQuantity" value="0.5" unit="arcsec"/>
                  <LITERAL dmtype="ivoa:RealQuantity" value="0.25" unit="arcsec"/>
                </ATTRIBUTE>
                <ATTRIBUTE dmrole="meas:Ellipse.posAngle">
                  <LITERAL dmtype="ivoa:RealQuantity" value="30" unit="deg"/>
                </ATTRIBUTE>
              </INSTANCE>
            </ATTRIBUTE>
            <ATTRIBUTE dmrole="meas:Error.sysError">
              <INSTANCE dmtype="meas:Bounds2D">
                <ATTRIBUTE dmrole="meas:Bounds2D.loLimit">
                  <LITERAL dmtype="ivoa:RealQuantity" value="83.7" unit="deg"/>
                  <LITERAL dmtype="ivoa:RealQuantity" value="-5.5" unit="deg"/>
                </ATTRIBUTE>
                <ATTRIBUTE dmrole="meas:Bounds2D.hiLimit">
                  <LITERAL dmtype="ivoa:RealQuantity" value="83.9" unit="deg"/>
                </ATTRIBUTE>
              </INSTANCE>
            </ATTRIBUTE>
          </INSTANCE>
        </COMPOSITION>
      </INSTANCE>
    </GLOBALS>
    <TEMPLATES>
      <INSTANCE dmtype="meas:Time" ID="_obs_time">
        <ATTRIBUTE dmrole="meas:Time.coord">
          <INSTANCE dmtype="coords:JD">
            <ATTRIBUTE dmrole="coords:JD.date">
              <COLUMN dmtype="ivoa:real" ref="_jd"/>
            </ATTRIBUTE>
            <REFERENCE dmrole="coords:Coordinate.coordSys"><IDREF>_bare_sys</IDREF></REFERENCE>
          </INSTANCE>
        </ATTRIBUTE>
      </INSTANCE>
      <INSTANCE dmtype="coords:ISOTime" ID="_obs_date">
        <ATTRIBUTE dmrole="coords:ISOTime.date">
          <COLUMN dmtype="ivoa:datetime" ref="_date"/>
        </ATTRIBUTE>
      </INSTANCE>
    </TEMPLATES>
  </VODML>
  <RESOURCE>
    <TABLE>
      <FIELD ID="_jd" name="jd" datatype="double"/>
      <FIELD ID="_date" name="date" datatype="char" arraysize="*"/>
      <DATA>
        <TABLEDATA>
          <TR><TD>2455000.5</TD><TD>2009-06-18T12:00:00</TD></TR>
          <TR><TD></TD><TD></TD></TR>
        </TABLEDATA>
      </DATA>
    </TABLE>
  </RESOURCE>
</VOTABLE>
"#;
